//! The WS-Discovery service descriptor.
//!
//! A single JSON document consumed by the wsdd announcement daemon: the
//! Kerberos realm, the host's NetBIOS identity and workgroup, the interfaces
//! to announce on, and whether announcement is enabled at all.

use serde::{Deserialize, Serialize};
use tracing::debug;

use etcgen_store::ConfigSource;

use crate::error::CoreError;

/// The descriptor shape, serialized in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Kerberos realm (GLOBAL/realm parameter), empty when unset.
    pub realm: String,

    pub netbios_name: String,

    pub workgroup: String,

    /// Addresses to announce on: the SMB bind addresses when the
    /// administrator restricted them, otherwise every discoverable bind
    /// address choice. Passed through exactly as supplied — no
    /// de-duplication or validation at this layer.
    pub interfaces: Vec<String>,

    /// Mirrors the network configuration's wsd announcement toggle.
    pub enabled: bool,
}

impl ServiceDescriptor {
    /// Serialize as the on-disk document: pretty-printed JSON with a
    /// trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

/// Build the descriptor from a fresh configuration fetch.
pub fn build_descriptor<S: ConfigSource>(source: &S) -> Result<ServiceDescriptor, CoreError> {
    let network = source.network_config()?;
    let smb = source.smb_config()?;

    let realm = source.parameter("GLOBAL", "realm")?.unwrap_or_default();

    let interfaces = if smb.bindip.is_empty() {
        source.bind_address_choices()?
    } else {
        smb.bindip
    };
    debug!(count = interfaces.len(), "selected announcement interfaces");

    Ok(ServiceDescriptor {
        realm,
        netbios_name: smb.netbiosname,
        workgroup: smb.workgroup,
        interfaces,
        enabled: network.service_announcement.wsd,
    })
}

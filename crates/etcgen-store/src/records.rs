// ── Configuration record types ──
//
// Plain data mirrors of the configuration store's records. Each is a
// read-only snapshot fetched fresh per render; none is cached or mutated.

use serde::{Deserialize, Serialize};

/// Host-level network configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Short hostname of this node (e.g., "truenas").
    pub hostname_local: String,

    /// DNS domain the node considers itself part of (e.g., "local").
    pub domain: String,

    /// Administrator-supplied extra hosts-file lines, emitted verbatim and
    /// in this exact order. May be empty.
    #[serde(default)]
    pub hosts: Vec<String>,

    /// Per-protocol discovery announcement toggles.
    #[serde(default)]
    pub service_announcement: ServiceAnnouncement,
}

/// Which discovery protocols this host announces itself on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceAnnouncement {
    #[serde(default)]
    pub netbios: bool,
    #[serde(default)]
    pub mdns: bool,
    /// WS-Discovery (wsdd) announcement.
    #[serde(default)]
    pub wsd: bool,
}

/// Directory-service (domain-join) configuration.
///
/// When `ad_enable` is true the AD identity overrides the local
/// hostname/domain for name-resolution purposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryServicesConfig {
    #[serde(default)]
    pub ad_enable: bool,

    /// Active Directory domain name as configured (case preserved).
    #[serde(default)]
    pub ad_domainname: String,
}

/// SMB service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmbConfig {
    /// NetBIOS name as configured (case preserved; typically upper-case).
    pub netbiosname: String,

    pub workgroup: String,

    /// Explicit bind addresses, if the administrator restricted the SMB
    /// service to specific interfaces. Empty means "bind everywhere".
    #[serde(default)]
    pub bindip: Vec<String>,
}

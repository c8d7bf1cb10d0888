//! JSON snapshot document and the [`ConfigSource`] implementation over it.
//!
//! The configuration store exports its relevant records as a single JSON
//! document; `SnapshotSource` serves typed lookups from that parsed document.
//! Sections a render needs but the document omits surface as
//! [`StoreError::Missing`] at lookup time, not at load time, so a hosts-only
//! render does not require SMB data to be present.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::records::{DirectoryServicesConfig, NetworkConfig, SmbConfig};
use crate::source::ConfigSource;

/// The on-disk snapshot document shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub network: Option<NetworkConfig>,

    pub smb: Option<SmbConfig>,

    #[serde(rename = "directoryservices")]
    pub directory_services: Option<DirectoryServicesConfig>,

    /// Every address a service could be announced on, as enumerated by the
    /// store. Order is authoritative; duplicates are passed through.
    #[serde(default)]
    pub bind_address_choices: Vec<String>,

    /// Arbitrary parameters, scope → name → value (e.g. GLOBAL/realm).
    #[serde(default)]
    pub parameters: HashMap<String, HashMap<String, String>>,
}

/// A [`ConfigSource`] backed by a parsed [`Snapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}

impl SnapshotSource {
    /// Wrap an already-built snapshot (used by tests and embedding callers).
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        debug!(path = %path.display(), "loading configuration snapshot");
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { snapshot })
    }
}

impl ConfigSource for SnapshotSource {
    fn network_config(&self) -> Result<NetworkConfig, StoreError> {
        debug!("fetching network configuration");
        self.snapshot
            .network
            .clone()
            .ok_or(StoreError::Missing { section: "network" })
    }

    fn smb_config(&self) -> Result<SmbConfig, StoreError> {
        debug!("fetching SMB configuration");
        self.snapshot
            .smb
            .clone()
            .ok_or(StoreError::Missing { section: "smb" })
    }

    fn directory_services_config(&self) -> Result<DirectoryServicesConfig, StoreError> {
        debug!("fetching directory-services configuration");
        self.snapshot
            .directory_services
            .clone()
            .ok_or(StoreError::Missing {
                section: "directoryservices",
            })
    }

    fn bind_address_choices(&self) -> Result<Vec<String>, StoreError> {
        debug!("enumerating bind address choices");
        Ok(self.snapshot.bind_address_choices.clone())
    }

    fn parameter(&self, scope: &str, name: &str) -> Result<Option<String>, StoreError> {
        debug!(scope, name, "looking up parameter");
        Ok(self
            .snapshot
            .parameters
            .get(scope)
            .and_then(|params| params.get(name))
            .cloned())
    }
}

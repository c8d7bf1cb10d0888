use crate::error::StoreError;
use crate::records::{DirectoryServicesConfig, NetworkConfig, SmbConfig};

/// The configuration-retrieval interface, one method per lookup.
///
/// Renderers take an implementation by generic parameter instead of
/// dispatching calls by name against the store, which keeps the seam typed
/// and lets tests inject an in-memory [`SnapshotSource`](crate::SnapshotSource).
///
/// Calls are synchronous and blocking; a failed lookup aborts the render.
pub trait ConfigSource {
    /// Fetch the host-level network configuration.
    fn network_config(&self) -> Result<NetworkConfig, StoreError>;

    /// Fetch the SMB service configuration.
    fn smb_config(&self) -> Result<SmbConfig, StoreError>;

    /// Fetch the directory-service (domain-join) configuration.
    fn directory_services_config(&self) -> Result<DirectoryServicesConfig, StoreError>;

    /// Enumerate every address a network service could be announced on,
    /// including cluster-virtual addresses.
    ///
    /// Order and duplicates are the enumeration's responsibility; callers
    /// pass the list through untouched.
    fn bind_address_choices(&self) -> Result<Vec<String>, StoreError>;

    /// Look up an arbitrary configuration parameter by scope and name.
    ///
    /// Returns `None` when the parameter is not set.
    fn parameter(&self, scope: &str, name: &str) -> Result<Option<String>, StoreError>;
}

//! Typed access to the system configuration data that `etcgen` renders from.
//!
//! This crate owns the data-access seam of the workspace:
//!
//! - **Record types** ([`records`]) — plain serde structs mirroring the
//!   configuration store's network, SMB, and directory-service records.
//! - **[`ConfigSource`]** — the retrieval interface, one method per lookup.
//!   Renderers in `etcgen-core` are generic over it, so tests inject an
//!   in-memory snapshot and production injects a file-backed one.
//! - **[`SnapshotSource`]** — a `ConfigSource` over a JSON snapshot document
//!   exported from the configuration store.
//!
//! The configuration store itself (the service that assembles these records
//! from the running system) is an external collaborator; nothing here caches,
//! mutates, or writes back.

pub mod error;
pub mod records;
pub mod snapshot;
pub mod source;

pub use error::StoreError;
pub use records::{DirectoryServicesConfig, NetworkConfig, ServiceAnnouncement, SmbConfig};
pub use snapshot::{Snapshot, SnapshotSource};
pub use source::ConfigSource;

//! Rendering logic between `etcgen-store` and the artifact files.
//!
//! This crate owns the domain logic of the workspace:
//!
//! - **[`EtcRenderer`]** — facade over a [`ConfigSource`] that fetches the
//!   relevant records, renders the artifacts, and (optionally) writes them to
//!   their destinations.
//! - **[`identity`]** — the hostname/domain resolution rule, including the
//!   directory-service override.
//! - **[`hosts`]** — the hosts-file renderer and its sentinel marker.
//! - **[`wsdd`]** — the WS-Discovery service descriptor and its builder.
//! - **[`ownership`]** — the wsdd log-file ownership fix-up.
//!
//! Every render is a single synchronous pass: fetch, resolve, render, write.
//! Retrieval failures abort with no partial output; there is no retry at this
//! layer (the invoking orchestrator owns retry and backoff).

pub mod error;
pub mod hosts;
pub mod identity;
pub mod ownership;
pub mod renderer;
pub mod wsdd;

mod write;

pub use error::CoreError;
pub use hosts::{CUSTOM_HOSTS_MARKER, render_hosts};
pub use identity::{Identity, resolve_identity};
pub use ownership::{WSDD_LOG_FILE, WSDD_LOG_GID, WSDD_LOG_UID, ensure_owned_log};
pub use renderer::EtcRenderer;
pub use wsdd::{ServiceDescriptor, build_descriptor};

// Re-export the data-access seam so CLI code needs only this crate.
pub use etcgen_store::{ConfigSource, Snapshot, SnapshotSource, StoreError};

use std::path::PathBuf;

use thiserror::Error;

use etcgen_store::StoreError;

/// Top-level error type for the `etcgen-core` crate.
///
/// Retrieval failures propagate unchanged; filesystem failures carry the
/// path they occurred on. The CLI maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Any failure obtaining configuration data. The render aborts with no
    /// partial output.
    #[error("configuration retrieval failed: {0}")]
    Store(#[from] StoreError),

    /// The service descriptor could not be serialized.
    #[error("failed to serialize service descriptor: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An artifact could not be written to its destination.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log file could not be opened or created for the ownership
    /// fix-up (a merely absent file is recovered by creating it).
    #[error("failed to open {path} for the ownership fix-up: {source}")]
    LogOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Ownership could not be set on the opened log file.
    #[error("failed to set ownership on {path}: {source}")]
    Chown {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

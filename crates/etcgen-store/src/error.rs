use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the `etcgen-store` crate.
///
/// Every variant is a retrieval failure from the renderers' point of view:
/// `etcgen-core` propagates these unchanged and aborts the render with no
/// partial output.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot document is not valid JSON or does not match the
    /// expected record shapes.
    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A required section is absent from the snapshot document.
    #[error("snapshot is missing the '{section}' section")]
    Missing { section: &'static str },
}

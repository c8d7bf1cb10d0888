//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help
//! text and stable exit codes.

use std::io::ErrorKind;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use etcgen_core::{CoreError, StoreError};

/// Exit codes surfaced to the invoking orchestrator.
///
/// 0 and 2 come from successful runs and clap usage errors; kept here so
/// the full map lives in one place.
#[allow(dead_code)]
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const RETRIEVAL: i32 = 4;
    pub const PERMISSION: i32 = 5;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration loading failed")]
    #[diagnostic(
        code(etcgen::config),
        help(
            "Check the config file syntax and ETCGEN_* environment variables.\n\
             The config file path can be overridden with --config."
        )
    )]
    Config {
        #[source]
        source: Box<figment::Error>,
    },

    // ── Snapshot retrieval ───────────────────────────────────────────

    #[error("Could not retrieve configuration data")]
    #[diagnostic(
        code(etcgen::retrieval),
        help(
            "The snapshot file must exist and contain the sections the\n\
             requested artifact needs. Point --snapshot (or ETCGEN_SNAPSHOT)\n\
             at a current export from the configuration store."
        )
    )]
    Retrieval {
        #[source]
        source: StoreError,
    },

    // ── Artifact writing ─────────────────────────────────────────────

    #[error("Could not write artifact to {path}")]
    #[diagnostic(
        code(etcgen::write),
        help("Check that the destination directory exists and is writable.")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not fix ownership of {path}")]
    #[diagnostic(
        code(etcgen::ownership),
        help("The log ownership fix-up needs privileges to chown; run as root.")
    )]
    Ownership {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize the service descriptor")]
    #[diagnostic(code(etcgen::serialize))]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    /// Map to the exit code the orchestrator keys on.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => exit_code::CONFIG,
            Self::Retrieval { .. } => exit_code::RETRIEVAL,
            Self::Write { source, .. } | Self::Ownership { source, .. } => {
                if source.kind() == ErrorKind::PermissionDenied {
                    exit_code::PERMISSION
                } else {
                    exit_code::GENERAL
                }
            }
            Self::Serialize { .. } => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Store(source) => Self::Retrieval { source },
            CoreError::Write { path, source } => Self::Write { path, source },
            CoreError::LogOpen { path, source } | CoreError::Chown { path, source } => {
                Self::Ownership { path, source }
            }
            CoreError::Serialize(source) => Self::Serialize { source },
        }
    }
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config {
            source: Box::new(err),
        }
    }
}

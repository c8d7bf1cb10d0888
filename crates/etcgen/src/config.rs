//! CLI-owned configuration: snapshot location and artifact destinations.
//!
//! TOML file at the XDG config path, every key overridable through
//! `ETCGEN_*` environment variables, snapshot path additionally through the
//! `--snapshot` flag. Core never sees these types -- it receives paths.

use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Configuration snapshot to render from.
    #[serde(default = "default_snapshot")]
    pub snapshot: PathBuf,

    /// Destination of the hosts file.
    #[serde(default = "default_hosts_path")]
    pub hosts_path: PathBuf,

    /// Destination of the WS-Discovery service descriptor.
    #[serde(default = "default_wsdd_path")]
    pub wsdd_path: PathBuf,

    /// The announcement daemon's log file (ownership is fixed per render).
    #[serde(default = "default_wsdd_log_path")]
    pub wsdd_log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            hosts_path: default_hosts_path(),
            wsdd_path: default_wsdd_path(),
            wsdd_log_path: default_wsdd_log_path(),
        }
    }
}

fn default_snapshot() -> PathBuf {
    PathBuf::from("/var/lib/etcgen/snapshot.json")
}
fn default_hosts_path() -> PathBuf {
    PathBuf::from("/etc/hosts")
}
fn default_wsdd_path() -> PathBuf {
    PathBuf::from("/etc/wsdd.json")
}
fn default_wsdd_log_path() -> PathBuf {
    PathBuf::from(etcgen_core::WSDD_LOG_FILE)
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "etcgen", "etcgen").map_or_else(
        || PathBuf::from("/etc/etcgen/config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ───────────────────────────────────────────────────

/// Load the full Config from defaults + file + environment + flags.
pub fn load_config(global: &GlobalOpts) -> Result<Config, CliError> {
    let path = global.config.clone().unwrap_or_else(config_path);

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("ETCGEN_"));

    let mut config: Config = figment.extract().map_err(CliError::from)?;

    // The --snapshot flag outranks both file and environment.
    if let Some(ref snapshot) = global.snapshot {
        config.snapshot = snapshot.clone();
    }
    Ok(config)
}

//! wsdd log-file ownership fix-up.
//!
//! The announcement daemon runs unprivileged and must be able to append to
//! its log, so every render hands the file to the daemon's uid/gid. The file
//! is opened with create-if-absent and ownership is set on the open handle,
//! so there is no window between an existence check and the chown.

use std::fs::OpenOptions;
use std::os::unix::fs::fchown;
use std::path::Path;

use tracing::debug;

use crate::error::CoreError;

/// Where the announcement daemon logs.
pub const WSDD_LOG_FILE: &str = "/var/log/wsdd.log";

/// uid/gid the daemon runs as (daemon:daemon).
pub const WSDD_LOG_UID: u32 = 1;
pub const WSDD_LOG_GID: u32 = 1;

/// Ensure `path` exists and is owned by `uid`:`gid`.
///
/// Idempotent; an absent file is created. Permission and I/O failures
/// propagate.
pub fn ensure_owned_log(path: &Path, uid: u32, gid: u32) -> Result<(), CoreError> {
    debug!(path = %path.display(), uid, gid, "fixing log ownership");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| CoreError::LogOpen {
            path: path.to_path_buf(),
            source,
        })?;
    fchown(&file, Some(uid), Some(gid)).map_err(|source| CoreError::Chown {
        path: path.to_path_buf(),
        source,
    })
}

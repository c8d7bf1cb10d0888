//! Atomic artifact writes.
//!
//! Name resolution reads the hosts file constantly, so artifacts are staged
//! in a temporary file in the destination directory and renamed into place.
//! Consumers never observe a partially-written file.

use std::fs::Permissions;
use std::io::Write as _;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::CoreError;

pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), CoreError> {
    let write_err = |source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    staged.write_all(contents.as_bytes()).map_err(write_err)?;
    // Temp files start 0600; the rename carries the mode onto the
    // destination, and every artifact here is read by unprivileged
    // consumers (the resolver, the wsdd daemon).
    staged
        .as_file()
        .set_permissions(Permissions::from_mode(0o644))
        .map_err(write_err)?;
    staged
        .persist(path)
        .map_err(|err| write_err(err.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}

//! Directory inspection and preparation.

use std::fs::{self, DirBuilder};
use std::io;
use std::path::Path;

use crate::config::FsOptions;
use crate::error::{Error, Result};

/// Check if a directory is empty.
///
/// Only the first entry is read, so this is cheap for large directories.
/// Fails if the directory cannot be opened, including when the path is a
/// file or does not exist.
pub fn dir_empty(dir: impl AsRef<Path>) -> Result<bool> {
    let dir = dir.as_ref();
    let open_error = |source| Error::Open {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir).map_err(open_error)?;
    match entries.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(e)) => Err(open_error(e)),
    }
}

/// Check if a directory exists.
///
/// Returns `Ok(false)` only when nothing exists at the path. An existing
/// entry that is not a directory is an error, as is any stat failure other
/// than a missing entry.
pub fn dir_exists(dir: impl AsRef<Path>) -> Result<bool> {
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return Err(Error::EmptyPath);
    }

    let metadata = match fs::metadata(dir) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(source) => {
            return Err(Error::Stat {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }
    Ok(true)
}

/// Ensure a directory is writable, creating it with default options if it
/// does not exist.
pub fn ensure_dir_writable(dir: impl AsRef<Path>) -> Result<()> {
    ensure_dir_writable_with(dir, &FsOptions::default())
}

/// Ensure a directory is writable, creating it if it does not exist.
///
/// Only the last path component is created; its parent must already exist.
/// An existing directory is tested by creating and deleting a uniquely
/// named probe file in it, since permission bits do not reliably say
/// whether a write will succeed.
pub fn ensure_dir_writable_with(dir: impl AsRef<Path>, options: &FsOptions) -> Result<()> {
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return Err(Error::EmptyPath);
    }

    let metadata = match fs::metadata(dir) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            create_dir(dir, options).map_err(|e| Error::not_writable(dir, e))?;
            tracing::debug!("Created directory: {}", dir.display());
            return Ok(());
        }
        Err(e) => return Err(Error::not_writable(dir, e)),
    };

    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let probe = tempfile::Builder::new()
        .prefix(&options.probe_prefix)
        .tempfile_in(dir)
        .map_err(|e| Error::not_writable(dir, e))?;
    let probe_path = probe.path().to_path_buf();

    // Closes the handle before deleting the file.
    probe.close().map_err(|source| Error::Remove {
        path: probe_path,
        source,
    })?;

    tracing::debug!("Directory is writable: {}", dir.display());
    Ok(())
}

/// Create a single directory level with the configured mode.
fn create_dir(dir: &Path, options: &FsOptions) -> io::Result<()> {
    let mut builder = DirBuilder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(options.dir_mode);
    }
    #[cfg(not(unix))]
    let _ = options;

    builder.create(dir)
}

//! File existence and modification tracking.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use crate::error::{Error, Result};

/// Outcome of a modification time comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileChange {
    /// Current modification time of the file.
    pub modified: SystemTime,
    /// Whether `modified` differs from the previously recorded time.
    pub changed: bool,
}

/// Compare a file's modification time to a previously recorded one.
///
/// `previous` is `None` when the file was never observed, which always
/// counts as a change. Times are compared for equality, so a file whose
/// time moved backwards is reported as changed too.
pub fn file_changed(path: impl AsRef<Path>, previous: Option<SystemTime>) -> Result<FileChange> {
    let path = path.as_ref();
    let stat_error = |source| Error::Stat {
        path: path.to_path_buf(),
        source,
    };

    let modified = fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(stat_error)?;

    Ok(FileChange {
        modified,
        changed: previous != Some(modified),
    })
}

/// Check whether anything exists at a path.
///
/// Any stat failure other than a missing entry counts as existing, so an
/// entry hidden behind an unreadable directory is reported as present.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    !matches!(fs::metadata(path), Err(e) if e.kind() == io::ErrorKind::NotFound)
}

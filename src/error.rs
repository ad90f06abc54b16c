//! Error types for the fsutil library.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum Error {
    // Argument errors
    #[error("directory not specified")]
    EmptyPath,

    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    // Writability errors
    #[error("directory not writable: {}: permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("directory not writable: {}: {source}", path.display())]
    NotWritable { path: PathBuf, source: io::Error },

    // Wrapped system errors
    #[error("cannot stat {}: {source}", path.display())]
    Stat { path: PathBuf, source: io::Error },

    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot remove {}: {source}", path.display())]
    Remove { path: PathBuf, source: io::Error },

    // Home expansion errors
    #[error("cannot expand user-specific home dir: {}", path.display())]
    UnsupportedExpansion { path: PathBuf },

    #[error("home directory not found")]
    HomeNotFound,

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the failure was caused by missing permissions.
    ///
    /// Holds for the classified `PermissionDenied` variant as well as for any
    /// wrapped IO error whose kind is `PermissionDenied`.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Error::PermissionDenied { .. } => true,
            _ => self.io_kind() == Some(io::ErrorKind::PermissionDenied),
        }
    }

    /// Whether a wrapped IO error reports a missing entry.
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == Some(io::ErrorKind::NotFound)
    }

    /// The path the failure refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::NotADirectory { path }
            | Error::PermissionDenied { path }
            | Error::NotWritable { path, .. }
            | Error::Stat { path, .. }
            | Error::Open { path, .. }
            | Error::Remove { path, .. }
            | Error::UnsupportedExpansion { path } => Some(path),
            _ => None,
        }
    }

    fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::NotWritable { source, .. }
            | Error::Stat { source, .. }
            | Error::Open { source, .. }
            | Error::Remove { source, .. }
            | Error::Io(source) => Some(source.kind()),
            _ => None,
        }
    }

    /// Classify a failure of the writability ensurer, keeping permission
    /// denial distinguishable from everything else.
    pub(crate) fn not_writable(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            Error::PermissionDenied {
                path: path.to_path_buf(),
            }
        } else {
            Error::NotWritable {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

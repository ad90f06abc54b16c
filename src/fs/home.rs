//! Home directory expansion.

use std::env;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Leading path component that stands for the current user's home.
const HOME_MARKER: &str = "~";

#[cfg(windows)]
const HOME_ENV: &str = "USERPROFILE";
#[cfg(not(windows))]
const HOME_ENV: &str = "HOME";

/// Expand a leading `~` to the current user's home directory.
///
/// Paths that do not start with `~` are returned unchanged. `~user` forms
/// are rejected since only the current user's home can be resolved.
pub fn expand_home(path: impl AsRef<Path>) -> Result<PathBuf> {
    expand_home_with(path.as_ref(), home_dir)
}

/// Resolve the home directory from the environment only. The user database
/// is not consulted.
fn home_dir() -> Result<PathBuf> {
    match env::var_os(HOME_ENV) {
        Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
        _ => Err(Error::HomeNotFound),
    }
}

fn expand_home_with<F>(path: &Path, home: F) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    let mut components = path.components();
    let first = match components.next() {
        Some(Component::Normal(first)) => first,
        _ => return Ok(path.to_path_buf()),
    };

    if first != OsStr::new(HOME_MARKER) {
        if first.as_encoded_bytes().starts_with(HOME_MARKER.as_bytes()) {
            return Err(Error::UnsupportedExpansion {
                path: path.to_path_buf(),
            });
        }
        return Ok(path.to_path_buf());
    }

    let home = home()?;
    let rest: PathBuf = components.collect();
    let expanded = if rest.as_os_str().is_empty() {
        home
    } else {
        home.join(rest)
    };

    tracing::trace!("Expanded {} to {}", path.display(), expanded.display());
    Ok(expanded)
}

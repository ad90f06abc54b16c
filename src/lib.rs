//! fsutil - filesystem inspection and preparation helpers.
//!
//! Each operation is a stateless, blocking query or single side effect
//! against the host filesystem.
//!
//! # Features
//!
//! - Check whether a directory is empty or exists
//! - Ensure a directory exists and is writable, creating it if missing
//! - Expand a leading `~` to the current user's home directory
//! - Detect modification time changes of a file
//! - Test whether a path exists
//!
//! # Example
//!
//! ```no_run
//! use fsutil::{ensure_dir_writable, expand_home, file_changed};
//!
//! fn main() -> fsutil::Result<()> {
//!     let dir = expand_home("~/.cache/myapp")?;
//!     ensure_dir_writable(&dir)?;
//!
//!     let state = dir.join("state.json");
//!     let change = file_changed(&state, None)?;
//!     if change.changed {
//!         // ... reload state
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fs;

// Re-exports for convenience
pub use config::FsOptions;
pub use error::{Error, Result};
pub use fs::{
    dir_empty, dir_exists, ensure_dir_writable, ensure_dir_writable_with, expand_home,
    file_changed, file_exists, FileChange,
};

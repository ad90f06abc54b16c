//! Filesystem module.
//!
//! Provides:
//! - Directory emptiness, existence and writability checks
//! - File existence and modification time tracking
//! - Home directory expansion

pub mod dirs;
pub mod files;
pub mod home;

pub use dirs::{dir_empty, dir_exists, ensure_dir_writable, ensure_dir_writable_with};
pub use files::{file_changed, file_exists, FileChange};
pub use home::expand_home;

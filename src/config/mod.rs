//! Configuration module for fsutil.
//!
//! This module handles loading `FsOptions` from TOML files and validating
//! them before use.

pub mod loader;

pub use loader::FsOptions;

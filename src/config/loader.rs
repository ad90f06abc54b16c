//! Options structure and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default permission bits for directories created by the writability check.
pub const DEFAULT_DIR_MODE: u32 = 0o775;

/// Default name prefix of the probe file.
pub const DEFAULT_PROBE_PREFIX: &str = "writetest";

/// Settings for the directory writability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsOptions {
    /// Permission bits for a directory created because it was missing.
    /// Only honored on Unix.
    #[serde(default = "default_dir_mode")]
    pub dir_mode: u32,

    /// Name prefix of the temporary file written to test writability.
    #[serde(default = "default_probe_prefix")]
    pub probe_prefix: String,
}

impl Default for FsOptions {
    fn default() -> Self {
        Self {
            dir_mode: DEFAULT_DIR_MODE,
            probe_prefix: default_probe_prefix(),
        }
    }
}

fn default_dir_mode() -> u32 {
    DEFAULT_DIR_MODE
}

fn default_probe_prefix() -> String {
    DEFAULT_PROBE_PREFIX.to_string()
}

impl FsOptions {
    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Options file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate options from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: FsOptions = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that the options can be used as given.
    pub fn validate(&self) -> Result<()> {
        if self.probe_prefix.is_empty() {
            return Err(Error::Config("probe_prefix must not be empty".to_string()));
        }

        if self.probe_prefix.contains('/') || self.probe_prefix.contains('\\') {
            return Err(Error::Config(format!(
                "probe_prefix must not contain path separators: '{}'",
                self.probe_prefix
            )));
        }

        if self.dir_mode > 0o7777 {
            return Err(Error::Config(format!(
                "dir_mode is not a valid permission mode: {:o}",
                self.dir_mode
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = FsOptions::default();
        assert_eq!(options.dir_mode, 0o775);
        assert_eq!(options.probe_prefix, "writetest");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let options = FsOptions::from_toml_str("dir_mode = 0o700\n").unwrap();
        assert_eq!(options.dir_mode, 0o700);
        assert_eq!(options.probe_prefix, DEFAULT_PROBE_PREFIX);

        let options = FsOptions::from_toml_str("").unwrap();
        assert_eq!(options, FsOptions::default());
    }

    #[test]
    fn test_invalid_probe_prefix() {
        assert!(matches!(
            FsOptions::from_toml_str("probe_prefix = \"\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            FsOptions::from_toml_str("probe_prefix = \"a/b\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_invalid_mode() {
        assert!(matches!(
            FsOptions::from_toml_str("dir_mode = 0o17777"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            FsOptions::from_toml_str("dir_mode = "),
            Err(Error::TomlParse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "probe_prefix = \".probe\"").unwrap();

        let options = FsOptions::load(file.path()).unwrap();
        assert_eq!(options.probe_prefix, ".probe");
        assert_eq!(options.dir_mode, DEFAULT_DIR_MODE);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FsOptions::load(&dir.path().join("fsutil.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}

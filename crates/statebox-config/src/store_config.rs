//! Store configuration
//!
//! Configuration loaded from .statebox.toml file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::paths::{self, CONFIG_FILE_NAME};

/// Store configuration loaded from .statebox.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of dispatch calls that may be nested inside each other
    /// (listeners or middleware dispatching while a dispatch is running).
    #[serde(default = "default_max_dispatch_depth")]
    pub max_dispatch_depth: usize,

    /// Log every dispatched action at debug level
    #[serde(default = "default_log_actions")]
    pub log_actions: bool,
}

fn default_max_dispatch_depth() -> usize {
    32
}

fn default_log_actions() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_dispatch_depth: default_max_dispatch_depth(),
            log_actions: default_log_actions(),
        }
    }
}

/// Where [`StoreConfig::load_from`] took its values from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this `.statebox.toml`
    File(PathBuf),
    /// No usable file was found
    Defaults,
}

impl StoreConfig {
    /// Load config from `.statebox.toml` in the current directory, then the
    /// home directory, or use defaults
    pub fn load() -> Self {
        Self::load_from(&paths::config_search_dirs()).0
    }

    /// Look for `.statebox.toml` in each directory in order.
    ///
    /// The first file that exists decides the outcome: it is used if it
    /// parses, otherwise a warning is logged and defaults apply. Later
    /// directories are not consulted in either case. Unreadable files are
    /// skipped with a warning.
    pub fn load_from(search: &[PathBuf]) -> (Self, ConfigSource) {
        for dir in search {
            let path = dir.join(CONFIG_FILE_NAME);
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    log::warn!("Skipping unreadable config {}: {}", path.display(), e);
                    continue;
                }
            };

            return match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded store config from {}", path.display());
                    (config, ConfigSource::File(path))
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {:#}", path.display(), e);
                    (Self::default(), ConfigSource::Defaults)
                }
            };
        }

        log::debug!("Using default store config");
        (Self::default(), ConfigSource::Defaults)
    }

    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid store config")
    }

    /// Load config from an explicit path. Unlike [`StoreConfig::load`], a
    /// missing or invalid file is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded store config from {}", path.display());
        Ok(config)
    }

    /// Effective nesting limit; a configured zero still allows the outermost dispatch.
    pub fn dispatch_depth_limit(&self) -> usize {
        self.max_dispatch_depth.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.max_dispatch_depth, 32);
        assert!(config.log_actions);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            max_dispatch_depth = 4
            log_actions = false
        "#;
        let config = StoreConfig::from_toml(toml).unwrap();
        assert_eq!(config.max_dispatch_depth, 4);
        assert!(!config.log_actions);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = StoreConfig::from_toml("log_actions = false").unwrap();
        assert!(!config.log_actions);
        // Missing fields use defaults
        assert_eq!(config.max_dispatch_depth, 32);
    }

    #[test]
    fn test_config_rejects_wrong_types() {
        assert!(StoreConfig::from_toml("max_dispatch_depth = \"deep\"").is_err());
    }

    #[test]
    fn test_zero_depth_is_clamped() {
        let config = StoreConfig {
            max_dispatch_depth: 0,
            ..StoreConfig::default()
        };
        assert_eq!(config.dispatch_depth_limit(), 1);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_dispatch_depth = 8").unwrap();

        let config = StoreConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_dispatch_depth, 8);
        assert!(config.log_actions);
    }

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_prefers_first_directory() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let cwd_file = write_config(cwd.path(), "max_dispatch_depth = 3");
        write_config(home.path(), "max_dispatch_depth = 9");

        let (config, source) =
            StoreConfig::load_from(&[cwd.path().to_path_buf(), home.path().to_path_buf()]);
        assert_eq!(config.max_dispatch_depth, 3);
        assert_eq!(source, ConfigSource::File(cwd_file));
    }

    #[test]
    fn test_load_falls_back_to_home() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let home_file = write_config(home.path(), "log_actions = false");

        let (config, source) =
            StoreConfig::load_from(&[cwd.path().to_path_buf(), home.path().to_path_buf()]);
        assert!(!config.log_actions);
        assert_eq!(config.max_dispatch_depth, 32);
        assert_eq!(source, ConfigSource::File(home_file));
    }

    #[test]
    fn test_unparsable_config_uses_defaults() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write_config(cwd.path(), "max_dispatch_depth = [");
        write_config(home.path(), "max_dispatch_depth = 9");

        // A broken file still shadows the home config
        let (config, source) =
            StoreConfig::load_from(&[cwd.path().to_path_buf(), home.path().to_path_buf()]);
        assert_eq!(config, StoreConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let empty = tempfile::tempdir().unwrap();
        let (config, source) = StoreConfig::load_from(&[empty.path().to_path_buf()]);
        assert_eq!(config, StoreConfig::default());
        assert_eq!(source, ConfigSource::Defaults);

        let (config, source) = StoreConfig::load_from(&[]);
        assert_eq!(config, StoreConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn test_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(StoreConfig::from_file(&dir.path().join("absent.toml")).is_err());
    }
}

// Simple Browser config loader
// Reads the optional `config.json` from the platform config directory.
// A missing file means stock behavior: all `BrowserConfig` defaults.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::platform;
use crate::types::config::BrowserConfig;
use crate::types::errors::ConfigError;

/// Trait defining the config loader interface.
pub trait ConfigLoaderTrait {
    fn load(&self) -> Result<BrowserConfig, ConfigError>;
    fn config_path(&self) -> &Path;
}

/// Loads `BrowserConfig` from a JSON file on disk.
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new ConfigLoader.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `config.json`.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let config_path =
            path_override.unwrap_or_else(|| platform::get_config_dir().join("config.json"));
        Self { config_path }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ConfigLoaderTrait for ConfigLoader {
    /// Loads the config file.
    ///
    /// If the file does not exist, returns the defaults.
    /// If the file exists but is malformed, returns a parse error.
    fn load(&self) -> Result<BrowserConfig, ConfigError> {
        if !self.config_path.exists() {
            debug!(
                "no config at {}, using defaults",
                self.config_path.display()
            );
            return Ok(BrowserConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| ConfigError::Io(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config file: {}", e)))
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }
}

// src/config/mod.rs
pub mod types;

pub use self::types::{ArchitectureConfig, Config, LayerRule, ScanConfig};

use crate::error::{IndError, Result};
use std::fs;
use std::path::Path;

/// Name of the per-project config file looked up at the scan root.
pub const CONFIG_FILE: &str = "indu.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `indu.toml` from `root`, falling back to defaults when absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| IndError::io(e, &path))?;
        let config = Self::parse_toml(&content).map_err(|e| IndError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses config from TOML text. Missing tables take their defaults.
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or has wrong field types.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Renders the config back to TOML (used by `indu config`).
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

//! Configuration loaded from `~/.pantrywatch/config.toml`
//!
//! A default file is created on first load. The API key can be supplied in
//! the file or through the `GEMINI_API_KEY` environment variable; the
//! environment wins.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analyst: AnalystConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalystConfig {
    /// generateContent-style endpoint URL
    pub endpoint: String,
    /// API key; `GEMINI_API_KEY` overrides this
    pub api_key: Option<String>,
    /// Attempt budget per analysis call
    pub max_attempts: u32,
    /// Per-attempt request deadline in seconds
    pub request_timeout_secs: u64,
}

impl Default for AnalystConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            max_attempts: crate::analyst::DEFAULT_MAX_ATTEMPTS,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Inventory collection file; defaults to `inventory.json` next to the
    /// config file. One file scopes one user's collection.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration, creating the default file if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents =
            fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".pantrywatch").join("config.toml"))
    }

    /// Resolve the inventory store path
    pub fn store_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.store.path {
            return Ok(path.clone());
        }
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".pantrywatch").join("inventory.json"))
    }

    /// Resolve the API key (environment wins over the file)
    pub fn api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                return Ok(key);
            }
        }
        self.analyst
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .context("No API key configured: set GEMINI_API_KEY or analyst.api_key")
    }

    /// Per-attempt request deadline
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.analyst.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            analyst: AnalystConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.analyst.max_attempts, 5);
        assert_eq!(config.analyst.request_timeout_secs, 30);
        assert!(config.analyst.api_key.is_none());
        assert!(config.store.path.is_none());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = Config::default();
        config.analyst.api_key = Some("test-key".to_string());
        config.store.path = Some(PathBuf::from("/tmp/inv.json"));

        let toml_string = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml_string).unwrap();

        assert_eq!(deserialized.analyst.api_key.as_deref(), Some("test-key"));
        assert_eq!(deserialized.store.path, Some(PathBuf::from("/tmp/inv.json")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.analyst.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.analyst.max_attempts, 5);
    }
}

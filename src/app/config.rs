//! Configuration Management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pipeline::RecognizerConfig;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Recognizer tuning
    #[serde(default)]
    pub recognizer: RecognizerConfig,
    /// Session settings
    #[serde(default)]
    pub session: SessionConfig,
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Model metadata JSON holding the gesture label set
    pub labels_path: PathBuf,
    /// Per-call inference deadline in milliseconds (0 = unbounded)
    pub inference_timeout_ms: u64,
    /// Let the metadata file's pipeline hints override recognizer settings
    pub apply_metadata_hints: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            labels_path: PathBuf::from("models/metadata.json"),
            inference_timeout_ms: 0,
            apply_metadata_hints: true,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.recognizer.validate()?;
        if self.session.labels_path.as_os_str().is_empty() {
            return Err(crate::Error::Config(
                "labels_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".signstream").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}

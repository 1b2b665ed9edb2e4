//! Configuration for the circuit builder.
//!
//! Supports loading configuration from:
//! 1. A YAML file (explicit path, or `<config dir>/qforge/config.yaml`)
//! 2. `.env` files
//! 3. Environment variables (with `QFORGE_` prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::client::DEFAULT_ENDPOINT;
use crate::wire::DEFAULT_SHOTS;

/// Simulation backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Full URL of the simulate endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Shots per simulation.
    #[serde(default = "default_shots")]
    pub shots: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_shots() -> u32 {
    DEFAULT_SHOTS
}

fn default_timeout() -> u64 {
    60
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            shots: default_shots(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl BuilderConfig {
    /// `<config dir>/qforge/config.yaml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("qforge").join("config.yaml"))
    }

    /// Load configuration from a YAML file.
    ///
    /// Values are not validated here: environment overrides may still
    /// replace them. [`BuilderConfig::load`] validates the merged result.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        serde_yaml_ng::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration with the following precedence:
    /// 1. Load from `config_file`, else from the default path if it exists
    /// 2. Load .env file if it exists
    /// 3. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => {
                    debug!("Loading config from {}", path.display());
                    Self::from_file(path)?
                }
                None => BuilderConfig::default(),
            },
        };

        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge process environment variables into this configuration.
    pub fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Merge variables from `lookup` into this configuration.
    ///
    /// Only variables that are present override the current values;
    /// unparsable numbers are ignored.
    pub fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("QFORGE_ENDPOINT") {
            self.endpoint = v;
        }
        if let Some(v) = lookup("QFORGE_SHOTS") {
            if let Ok(val) = v.parse() {
                self.shots = val;
            }
        }
        if let Some(v) = lookup("QFORGE_TIMEOUT") {
            if let Ok(val) = v.parse() {
                self.timeout_seconds = val;
            }
        }
        if let Some(v) = lookup("QFORGE_CONNECT_TIMEOUT") {
            if let Ok(val) = v.parse() {
                self.connect_timeout_seconds = val;
            }
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Endpoint must not be empty".to_string(),
            ));
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "Endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }
        if self.shots == 0 {
            return Err(ConfigError::ValidationError(
                "Shots must be greater than 0".to_string(),
            ));
        }
        if self.timeout_seconds == 0 || self.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Timeouts must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

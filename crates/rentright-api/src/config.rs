//! Configuration file parsing for the listings API.
//!
//! Loads settings from TOML files: bind address, listing source and the
//! liberalization threshold used when classifying listings.

use rentright_domain::LIBERALIZATION_POINT_THRESHOLD;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// API configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Field present but unusable
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

/// API configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (default: 9000)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// JSON seed file to load listings from
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    /// SQLite catalog; takes precedence over `seed_path`
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// WWS points at or above which a listing counts as liberalized
    #[serde(default = "default_threshold")]
    pub liberalization_threshold: u32,

    /// `tracing` filter directive (e.g., "info,rentright_store=debug")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Default port: 9000
fn default_bind_port() -> u16 {
    9000
}

fn default_threshold() -> u32 {
    LIBERALIZATION_POINT_THRESHOLD
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl ApiConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ApiConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::MissingField("bind_address".to_string()));
        }
        if self.liberalization_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                field: "liberalization_threshold".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Create a default configuration for local development
    pub fn default_dev_config() -> Self {
        ApiConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            seed_path: Some(PathBuf::from("data/seed_listings.json")),
            database_path: None,
            liberalization_threshold: default_threshold(),
            log_filter: default_log_filter(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use rentright_domain::LIBERALIZATION_POINT_THRESHOLD;
use rentright_sdk::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the listings API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// WWS points at or above which a unit counts as liberalized
    #[serde(default = "default_threshold")]
    pub liberalization_threshold: u32,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".rentright").join("config.toml"))
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Set the liberalization threshold.
    pub fn set_threshold(&mut self, points: u32) -> Result<()> {
        if points == 0 {
            return Err(CliError::InvalidInput(
                "Liberalization threshold must be greater than zero".to_string(),
            ));
        }
        self.liberalization_threshold = points;
        Ok(())
    }

    /// Set the API base URL.
    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CliError::InvalidInput(format!(
                "API URL '{}' must start with http:// or https://",
                url
            )));
        }
        self.api_url = url;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            liberalization_threshold: default_threshold(),
            settings: Settings::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_threshold() -> u32 {
    LIBERALIZATION_POINT_THRESHOLD
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

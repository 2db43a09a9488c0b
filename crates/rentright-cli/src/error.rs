//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SDK error
    #[error("SDK error: {0}")]
    Sdk(#[from] rentright_sdk::SdkError),

    /// Domain validation error
    #[error("{0}")]
    Domain(#[from] rentright_domain::DomainError),

    /// Storage error
    #[error("Store error: {0}")]
    Store(#[from] rentright_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested listing does not exist
    #[error("Listing {0} not found")]
    ListingNotFound(rentright_domain::ListingId),
}

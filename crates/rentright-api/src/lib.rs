//! RentRight Listings API
//!
//! Serves the listing catalog over HTTP with fairness verdicts attached,
//! plus ad-hoc classification and WWS assessment endpoints.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ApiConfig;
use handlers::{create_router, AppState};
use rentright_domain::traits::ListingSource;
use rentright_domain::FairnessClassifier;
use rentright_store::{seed, MemoryStore, SqliteStore, StoreError};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// API server error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Catalog could not be loaded
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the in-memory catalog from the configured source
///
/// A configured database wins over the seed file. A seed file that cannot be
/// read or parsed is logged and yields an empty catalog; a broken database is
/// an error.
pub fn load_catalog(config: &ApiConfig) -> Result<MemoryStore, ApiError> {
    if let Some(db_path) = &config.database_path {
        info!("Loading listings from database {}", db_path.display());
        let store = SqliteStore::new(db_path)?;
        let listings = store.list_listings()?;
        return Ok(MemoryStore::from_listings(listings));
    }

    match &config.seed_path {
        Some(seed_path) => match seed::load_seed_file(seed_path) {
            Ok(report) => Ok(MemoryStore::from_listings(report.listings)),
            Err(e) => {
                error!("Could not load seed file {}: {}", seed_path.display(), e);
                Ok(MemoryStore::new())
            }
        },
        None => {
            warn!("No database_path or seed_path configured, serving an empty catalog");
            Ok(MemoryStore::new())
        }
    }
}

/// Start the API HTTP server
///
/// Loads the catalog, builds the classifier from the configured threshold,
/// and serves until the process stops.
pub async fn start_server(config: ApiConfig) -> Result<(), ApiError> {
    // A subscriber may already be installed by an embedding binary or test
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .try_init();

    info!("Starting RentRight API");
    info!("Bind address: {}", config.bind_addr());
    info!(
        "Liberalization threshold: {} points",
        config.liberalization_threshold
    );

    let catalog = load_catalog(&config)?;
    info!("Catalog holds {} listings", catalog.len());

    let classifier = FairnessClassifier::new(config.liberalization_threshold);
    let app = create_router(AppState::new(catalog, classifier));

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("API listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ApiError::Server(e.to_string()))?;

    Ok(())
}

//! RentRight Storage Layer
//!
//! Implements the `ListingSource` trait over two backends and loads listings
//! from seed files.
//!
//! # Architecture
//!
//! - [`seed`]: JSON seed files, scored with the WWS calculator on load
//! - [`MemoryStore`]: immutable in-memory catalog (served by the API)
//! - [`SqliteStore`]: persistent catalog built by the `seed` CLI command
//!
//! # Examples
//!
//! ```no_run
//! use rentright_domain::traits::ListingSource;
//! use rentright_store::{seed, MemoryStore};
//!
//! let report = seed::load_seed_file("data/seed_listings.json").unwrap();
//! let store = MemoryStore::from_listings(report.listings);
//! let listings = store.list_listings().unwrap();
//! ```

#![warn(missing_docs)]

mod memory;
pub mod seed;
mod sqlite;

pub use memory::MemoryStore;
pub use seed::{SeedListing, SeedReport};
pub use sqlite::SqliteStore;

use rentright_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Seed file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed file is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Listing failed domain validation
    #[error("Invalid listing: {0}")]
    Domain(#[from] DomainError),
}

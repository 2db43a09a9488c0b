//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::listing::{Listing, ListingId};

/// Trait for reading listings from a data source
///
/// Implemented by the infrastructure layer (rentright-store)
pub trait ListingSource {
    /// Error type for source operations
    type Error;

    /// All listings, ordered by id
    fn list_listings(&self) -> Result<Vec<Listing>, Self::Error>;

    /// Get a listing by id
    fn get_listing(&self, id: ListingId) -> Result<Option<Listing>, Self::Error>;
}

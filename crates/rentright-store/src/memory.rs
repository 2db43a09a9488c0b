//! In-memory listing catalog

use rentright_domain::traits::ListingSource;
use rentright_domain::{Listing, ListingId};
use std::collections::BTreeMap;
use std::convert::Infallible;
use tracing::warn;

/// Immutable in-memory catalog keyed by listing id
///
/// Built once at startup and shared read-only, so it needs no locking.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    listings: BTreeMap<ListingId, Listing>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from listings; a later duplicate id replaces the earlier one
    pub fn from_listings(listings: impl IntoIterator<Item = Listing>) -> Self {
        let mut map = BTreeMap::new();
        for listing in listings {
            let id = listing.id;
            if map.insert(id, listing).is_some() {
                warn!("Duplicate listing ID {} in catalog, keeping the last entry", id);
            }
        }
        Self { listings: map }
    }

    /// Number of listings
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the store holds no listings
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl ListingSource for MemoryStore {
    type Error = Infallible;

    fn list_listings(&self) -> Result<Vec<Listing>, Self::Error> {
        Ok(self.listings.values().cloned().collect())
    }

    fn get_listing(&self, id: ListingId) -> Result<Option<Listing>, Self::Error> {
        Ok(self.listings.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: ListingId, title: &str) -> Listing {
        Listing {
            id,
            title: title.to_string(),
            location: "Utrecht Oost".to_string(),
            images: vec![],
            advertised_rent: 2400.0,
            size_m2: 120.0,
            rooms: 4,
            description: String::new(),
            energy_label: None,
            woz_value: None,
            wws_points: Some(170),
            max_legal_rent: Some(1380.0),
            amenities: vec![],
            wws_breakdown: vec![],
        }
    }

    #[test]
    fn test_listings_ordered_by_id() {
        let store = MemoryStore::from_listings(vec![listing(3, "c"), listing(1, "a"), listing(2, "b")]);
        let ids: Vec<_> = store.list_listings().unwrap().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_get_listing() {
        let store = MemoryStore::from_listings(vec![listing(1, "a")]);
        assert_eq!(store.get_listing(1).unwrap().unwrap().title, "a");
        assert!(store.get_listing(999).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_last() {
        let store = MemoryStore::from_listings(vec![listing(1, "first"), listing(1, "second")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_listing(1).unwrap().unwrap().title, "second");
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.list_listings().unwrap().is_empty());
    }
}

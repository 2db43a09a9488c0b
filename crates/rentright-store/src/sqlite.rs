//! SQLite-backed listing catalog

use crate::StoreError;
use rentright_domain::traits::ListingSource;
use rentright_domain::{Amenity, BreakdownItem, Listing, ListingId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::{debug, info};

const LISTING_COLUMNS: &str = "id, title, location, images, advertised_rent, size_m2, rooms, \
     description, wws_points, max_legal_rent, energy_label, woz_value";

/// SQLite-based implementation of ListingSource
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database at the given path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rentright_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("listings.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(include_str!("schema.sql"))?;
        Ok(())
    }

    /// Replace the whole catalog in a single transaction
    ///
    /// Either every listing is written or, on the first failure, none are and
    /// the previous contents stay in place.
    pub fn replace_all(&mut self, listings: &[Listing]) -> Result<usize, StoreError> {
        for listing in listings {
            listing.validate()?;
        }

        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM amenities", [])?;
        tx.execute("DELETE FROM wws_breakdown_items", [])?;
        tx.execute("DELETE FROM listings", [])?;
        debug!("Cleared existing listings");

        for listing in listings {
            let images = serde_json::to_string(&listing.images)?;
            tx.execute(
                "INSERT INTO listings (id, title, location, images, advertised_rent, size_m2, rooms,
                                       description, wws_points, max_legal_rent, energy_label, woz_value)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    listing.id,
                    &listing.title,
                    &listing.location,
                    images,
                    listing.advertised_rent,
                    listing.size_m2,
                    listing.rooms,
                    &listing.description,
                    listing.wws_points,
                    listing.max_legal_rent,
                    &listing.energy_label,
                    listing.woz_value,
                ],
            )?;

            for amenity in &listing.amenities {
                tx.execute(
                    "INSERT INTO amenities (listing_id, name, icon) VALUES (?1, ?2, ?3)",
                    params![listing.id, &amenity.name, &amenity.icon],
                )?;
            }

            for item in &listing.wws_breakdown {
                tx.execute(
                    "INSERT INTO wws_breakdown_items (listing_id, item, points) VALUES (?1, ?2, ?3)",
                    params![listing.id, &item.item, item.points],
                )?;
            }
        }

        tx.commit()?;
        info!("Stored {} listings", listings.len());
        Ok(listings.len())
    }

    /// Number of stored listings
    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM listings", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
        let images_json: String = row.get(3)?;
        let images: Vec<String> = serde_json::from_str(&images_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?;

        Ok(Listing {
            id: row.get(0)?,
            title: row.get(1)?,
            location: row.get(2)?,
            images,
            advertised_rent: row.get(4)?,
            size_m2: row.get(5)?,
            rooms: row.get(6)?,
            description: row.get(7)?,
            wws_points: row.get(8)?,
            max_legal_rent: row.get(9)?,
            energy_label: row.get(10)?,
            woz_value: row.get(11)?,
            amenities: Vec::new(),
            wws_breakdown: Vec::new(),
        })
    }

    /// Load amenities and breakdown rows for a listing
    fn load_children(&self, listing: &mut Listing) -> Result<(), StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, icon FROM amenities WHERE listing_id = ?1 ORDER BY id")?;
        listing.amenities = stmt
            .query_map(params![listing.id], |row| {
                Ok(Amenity {
                    name: row.get(0)?,
                    icon: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = self.conn.prepare(
            "SELECT item, points FROM wws_breakdown_items WHERE listing_id = ?1 ORDER BY id",
        )?;
        listing.wws_breakdown = stmt
            .query_map(params![listing.id], |row| {
                Ok(BreakdownItem {
                    item: row.get(0)?,
                    points: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(())
    }
}

impl ListingSource for SqliteStore {
    type Error = StoreError;

    fn list_listings(&self) -> Result<Vec<Listing>, Self::Error> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM listings ORDER BY id", LISTING_COLUMNS))?;
        let mut listings = stmt
            .query_map([], Self::listing_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        for listing in &mut listings {
            self.load_children(listing)?;
        }

        Ok(listings)
    }

    fn get_listing(&self, id: ListingId) -> Result<Option<Listing>, Self::Error> {
        let listing = self
            .conn
            .query_row(
                &format!("SELECT {} FROM listings WHERE id = ?1", LISTING_COLUMNS),
                params![id],
                Self::listing_from_row,
            )
            .optional()?;

        match listing {
            Some(mut listing) => {
                self.load_children(&mut listing)?;
                Ok(Some(listing))
            }
            None => Ok(None),
        }
    }
}

//! Seed file loading
//!
//! A seed file is a JSON array of listings carrying raw WWS inputs
//! (`wws_input_data`) instead of computed scores. Loading scores every entry
//! that has a surface area and room count; entries without them are kept but
//! left unassessed. Entries that do not convert into a valid listing are
//! logged and skipped so one bad record does not empty the catalog.

use crate::StoreError;
use rentright_domain::{Amenity, DomainError, Listing, ListingId, WwsCalculator, WwsInput};
use serde::Deserialize;
use std::path::Path;
use tracing::{error, info, warn};

/// Raw WWS inputs as they appear in seed files
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeedWwsInput {
    /// Living area in square meters
    #[serde(default)]
    pub surface_area: Option<f64>,
    /// Number of rooms
    #[serde(default)]
    pub room_count: Option<u32>,
    /// Energy label
    #[serde(default)]
    pub energy_label: Option<String>,
    /// WOZ value in euros
    #[serde(default)]
    pub woz_value: Option<f64>,
}

impl SeedWwsInput {
    /// Calculator input, if the required fields are present
    pub fn to_wws_input(&self) -> Option<WwsInput> {
        Some(WwsInput {
            size_m2: self.surface_area?,
            rooms: self.room_count?,
            energy_label: self.energy_label.clone(),
            woz_value: self.woz_value,
        })
    }
}

/// One entry of a seed file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedListing {
    /// Listing id
    pub id: ListingId,
    /// Headline
    pub title: String,
    /// City and neighbourhood
    pub location: String,
    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,
    /// Asking rent in euros per month
    pub advertised_rent: f64,
    /// Advertised living area in square meters
    pub size: f64,
    /// Number of rooms
    pub rooms: u32,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Amenities
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    /// Raw WWS inputs
    #[serde(default)]
    pub wws_input_data: SeedWwsInput,
}

impl SeedListing {
    /// Convert into a listing, scoring it when the WWS inputs allow
    ///
    /// Returns the listing and whether it was assessed.
    pub fn into_listing(self, calculator: &WwsCalculator) -> Result<(Listing, bool), DomainError> {
        let wws_input = self.wws_input_data.to_wws_input();

        let mut listing = Listing {
            id: self.id,
            title: self.title,
            location: self.location,
            images: self.images,
            advertised_rent: self.advertised_rent,
            size_m2: self.size,
            rooms: self.rooms,
            description: self.description,
            energy_label: self.wws_input_data.energy_label,
            woz_value: self.wws_input_data.woz_value,
            wws_points: None,
            max_legal_rent: None,
            amenities: self.amenities,
            wws_breakdown: Vec::new(),
        };
        listing.validate()?;

        let assessed = match wws_input {
            Some(input) => match calculator.assess(&input) {
                Ok(assessment) => {
                    listing.apply_assessment(assessment);
                    true
                }
                Err(e) => {
                    warn!("Could not calculate WWS for listing ID {}: {}", listing.id, e);
                    false
                }
            },
            None => {
                warn!(
                    "Missing 'surface_area' or 'room_count' for listing ID {}, skipping WWS calculation",
                    listing.id
                );
                false
            }
        };

        Ok((listing, assessed))
    }
}

/// Outcome of loading a seed file
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    /// Successfully converted listings, in file order
    pub listings: Vec<Listing>,
    /// Entries in the file
    pub total: usize,
    /// Entries skipped because they were malformed
    pub skipped: usize,
    /// Listings loaded without a WWS assessment
    pub unassessed: usize,
}

/// Parse seed JSON with the default calculator
pub fn parse_seed(json: &str) -> Result<SeedReport, StoreError> {
    parse_seed_with(json, &WwsCalculator::default())
}

/// Parse seed JSON with a specific calculator
pub fn parse_seed_with(json: &str, calculator: &WwsCalculator) -> Result<SeedReport, StoreError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut report = SeedReport {
        total: entries.len(),
        ..SeedReport::default()
    };

    for (idx, entry) in entries.into_iter().enumerate() {
        let id = entry
            .get("id")
            .map(|v| v.to_string())
            .unwrap_or_else(|| "UNKNOWN".to_string());

        let seed: SeedListing = match serde_json::from_value(entry) {
            Ok(seed) => seed,
            Err(e) => {
                error!("Failed to parse seed entry {} (ID {}): {}", idx, id, e);
                report.skipped += 1;
                continue;
            }
        };

        match seed.into_listing(calculator) {
            Ok((listing, assessed)) => {
                if !assessed {
                    report.unassessed += 1;
                }
                report.listings.push(listing);
            }
            Err(e) => {
                error!("Failed to create listing for ID {}: {}", id, e);
                report.skipped += 1;
            }
        }
    }

    info!(
        "Loaded {} of {} seed listings ({} without WWS data)",
        report.listings.len(),
        report.total,
        report.unassessed
    );
    if report.skipped > 0 {
        warn!("Skipped {} malformed seed entries", report.skipped);
    }

    Ok(report)
}

/// Read and parse a seed file with the default calculator
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<SeedReport, StoreError> {
    load_seed_file_with(path, &WwsCalculator::default())
}

/// Read and parse a seed file with a specific calculator
pub fn load_seed_file_with<P: AsRef<Path>>(
    path: P,
    calculator: &WwsCalculator,
) -> Result<SeedReport, StoreError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    info!("Loading seed data from {}", path.as_ref().display());
    parse_seed_with(&contents, calculator)
}

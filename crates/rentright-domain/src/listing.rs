//! Listing module - rental listings as served to presentation layers

use crate::error::{ensure_amount, DomainError};
use crate::fairness::{FairnessClassifier, FairnessVerdict, RentFigures};
use crate::wws::{BreakdownItem, WwsAssessment};
use serde::{Deserialize, Serialize};

/// Identifier of a listing
pub type ListingId = u32;

/// A listed amenity with its display icon name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    /// Amenity name (e.g. "Balcony")
    pub name: String,
    /// Icon identifier for presentation layers
    pub icon: String,
}

/// A rental listing
///
/// JSON field names follow the public listings API (`advertisedRent`,
/// `size`, `wwsPoints`, `maxLegalRent`, `wwsBreakdown`); snake_case names are
/// accepted on input as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier
    pub id: ListingId,

    /// Headline shown on cards
    pub title: String,

    /// City and neighbourhood
    pub location: String,

    /// Image URLs, first one is the cover
    #[serde(default)]
    pub images: Vec<String>,

    /// Asking rent in euros per month
    #[serde(rename = "advertisedRent", alias = "advertised_rent")]
    pub advertised_rent: f64,

    /// Living area in square meters
    #[serde(rename = "size", alias = "size_m2")]
    pub size_m2: f64,

    /// Number of rooms
    pub rooms: u32,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Energy label, if known
    #[serde(default)]
    pub energy_label: Option<String>,

    /// WOZ value in euros, if known
    #[serde(default)]
    pub woz_value: Option<f64>,

    /// WWS point score, absent until assessed
    #[serde(default, rename = "wwsPoints", alias = "wws_points")]
    pub wws_points: Option<u32>,

    /// Maximum legal rent, absent until assessed
    #[serde(default, rename = "maxLegalRent", alias = "max_legal_rent")]
    pub max_legal_rent: Option<f64>,

    /// Amenities
    #[serde(default)]
    pub amenities: Vec<Amenity>,

    /// WWS point breakdown
    #[serde(default, rename = "wwsBreakdown", alias = "wws_breakdown")]
    pub wws_breakdown: Vec<BreakdownItem>,
}

impl Listing {
    /// Check the numeric fields of a listing
    ///
    /// Run once when a listing enters the system (seed file, database row,
    /// API response) so downstream code can trust its shape.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::invalid("title", "must not be empty"));
        }
        ensure_amount("advertisedRent", self.advertised_rent)?;
        ensure_amount("size", self.size_m2)?;
        if let Some(max) = self.max_legal_rent {
            ensure_amount("maxLegalRent", max)?;
        }
        if let Some(woz) = self.woz_value {
            ensure_amount("woz_value", woz)?;
        }
        Ok(())
    }

    /// Extract the classifier inputs
    ///
    /// Fails with `InvalidInput` when the listing has not been assessed yet.
    pub fn rent_figures(&self) -> Result<RentFigures, DomainError> {
        let points = self.wws_points.ok_or_else(|| DomainError::missing("wwsPoints"))?;
        let max = self
            .max_legal_rent
            .ok_or_else(|| DomainError::missing("maxLegalRent"))?;
        RentFigures::new(self.advertised_rent, max, points)
    }

    /// Classify this listing
    pub fn fairness(&self, classifier: &FairnessClassifier) -> Result<FairnessVerdict, DomainError> {
        Ok(classifier.classify_figures(&self.rent_figures()?))
    }

    /// Store a WWS assessment on the listing
    pub fn apply_assessment(&mut self, assessment: WwsAssessment) {
        self.wws_points = Some(assessment.points);
        self.max_legal_rent = Some(assessment.max_rent);
        self.wws_breakdown = assessment.breakdown;
    }
}

/// A listing together with its fairness verdict, as served by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingView {
    /// The listing itself
    #[serde(flatten)]
    pub listing: Listing,

    /// Verdict, `null` when the listing has no WWS data
    pub fairness: Option<FairnessVerdict>,
}

impl ListingView {
    /// Attach the verdict of `classifier`, if the listing can be classified
    pub fn new(listing: Listing, classifier: &FairnessClassifier) -> Self {
        let fairness = listing.fairness(classifier).ok();
        Self { listing, fairness }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fairness::FairnessCategory;
    use crate::wws::{assess, WwsInput};

    fn create_test_listing() -> Listing {
        Listing {
            id: 4,
            title: "Cozy Studio near Station".to_string(),
            location: "Rotterdam Centraal".to_string(),
            images: vec![],
            advertised_rent: 1100.0,
            size_m2: 45.0,
            rooms: 1,
            description: String::new(),
            energy_label: Some("C".to_string()),
            woz_value: None,
            wws_points: Some(125),
            max_legal_rent: Some(850.20),
            amenities: vec![],
            wws_breakdown: vec![],
        }
    }

    #[test]
    fn test_listing_fairness() {
        let listing = create_test_listing();
        let verdict = listing.fairness(&FairnessClassifier::default()).unwrap();
        assert_eq!(verdict.category, FairnessCategory::Overpriced);
    }

    #[test]
    fn test_unassessed_listing_not_coerced() {
        let mut listing = create_test_listing();
        listing.wws_points = None;

        let err = listing.fairness(&FairnessClassifier::default()).unwrap_err();
        assert_eq!(err, DomainError::missing("wwsPoints"));

        let mut listing = create_test_listing();
        listing.max_legal_rent = None;
        let err = listing.rent_figures().unwrap_err();
        assert_eq!(err, DomainError::missing("maxLegalRent"));
    }

    #[test]
    fn test_validate() {
        assert!(create_test_listing().validate().is_ok());

        let mut listing = create_test_listing();
        listing.advertised_rent = -5.0;
        assert!(listing.validate().is_err());

        let mut listing = create_test_listing();
        listing.title = "  ".to_string();
        assert!(listing.validate().is_err());
    }

    #[test]
    fn test_apply_assessment() {
        let mut listing = create_test_listing();
        let assessment = assess(&WwsInput {
            size_m2: 45.0,
            rooms: 1,
            energy_label: Some("C".to_string()),
            woz_value: None,
        })
        .unwrap();

        listing.apply_assessment(assessment);
        assert_eq!(listing.wws_points, Some(60));
        assert_eq!(listing.max_legal_rent, Some(500.0));
        assert_eq!(listing.wws_breakdown.len(), 4);
    }

    #[test]
    fn test_json_aliases() {
        let json = r#"{
            "id": 1,
            "title": "Charming Canal View Apartment",
            "location": "Amsterdam Centrum",
            "advertisedRent": 1850,
            "size": 75,
            "rooms": 2,
            "wwsPoints": 140,
            "maxLegalRent": 1050.75
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.advertised_rent, 1850.0);
        assert_eq!(listing.wws_points, Some(140));
        assert!(listing.amenities.is_empty());

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value["maxLegalRent"], 1050.75);
        assert!(value.get("max_legal_rent").is_none());
    }

    #[test]
    fn test_listing_view_flattens_listing() {
        let view = ListingView::new(create_test_listing(), &FairnessClassifier::default());
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["id"], 4);
        assert_eq!(value["advertisedRent"], 1100.0);
        assert_eq!(value["fairness"]["category"], "overpriced");

        let parsed: ListingView = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, view);
    }

    #[test]
    fn test_listing_view_without_verdict() {
        let mut listing = create_test_listing();
        listing.max_legal_rent = None;

        let view = ListingView::new(listing, &FairnessClassifier::default());
        assert!(view.fairness.is_none());
        let value = serde_json::to_value(&view).unwrap();
        assert!(value["fairness"].is_null());
    }

    #[test]
    fn test_negative_points_rejected_at_parse() {
        let json = r#"{"id": 1, "title": "t", "location": "l", "advertisedRent": 900,
                       "size": 40, "rooms": 1, "wwsPoints": -3}"#;
        assert!(serde_json::from_str::<Listing>(json).is_err());
    }
}

//! RentRight Domain Layer
//!
//! Core business logic for judging rental listings against the Dutch
//! rent-points system (WWS). Infrastructure (storage, HTTP) lives in other
//! crates and talks to this one through plain types and the traits in
//! [`traits`].
//!
//! ## Key Concepts
//!
//! - **Fairness verdict**: `Fair`, `Overpriced` or `LikelyLiberalized`,
//!   derived from advertised rent, maximum legal rent and WWS points
//! - **Liberalization threshold**: 136 points (2024), inclusive
//! - **WWS assessment**: point score, breakdown and maximum legal rent
//! - **Listing**: a typed, validated rental listing record

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fairness;
pub mod listing;
pub mod money;
pub mod traits;
pub mod wws;

// Re-exports for convenience
pub use error::DomainError;
pub use fairness::{
    classify, FairnessCategory, FairnessClassifier, FairnessVerdict, RentFigures,
    LIBERALIZATION_POINT_THRESHOLD,
};
pub use listing::{Amenity, Listing, ListingId, ListingView};
pub use wws::{BreakdownItem, WwsAssessment, WwsCalculator, WwsInput};

//! Rent fairness classification
//!
//! Compares a listing's advertised rent against the maximum legal rent derived
//! from its WWS point score. Units at or above the liberalization threshold are
//! presumed to sit in the free sector, where the maximum is only indicative.

use crate::error::{ensure_amount, DomainError};
use crate::money::format_euros;
use serde::{Deserialize, Serialize};
use std::fmt;

/// WWS point score at or above which a unit is presumed liberalized (2024 value)
pub const LIBERALIZATION_POINT_THRESHOLD: u32 = 136;

/// Fairness category of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FairnessCategory {
    /// Advertised rent at or below the maximum legal rent
    Fair,

    /// Advertised rent above the maximum legal rent
    Overpriced,

    /// Point score at or above the liberalization threshold
    LikelyLiberalized,
}

impl FairnessCategory {
    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FairnessCategory::Fair => "fair",
            FairnessCategory::Overpriced => "overpriced",
            FairnessCategory::LikelyLiberalized => "likely_liberalized",
        }
    }

    /// Short badge text for listing cards
    pub fn label(&self) -> &'static str {
        match self {
            FairnessCategory::Fair => "Fair Price",
            FairnessCategory::Overpriced => "Overpriced",
            FairnessCategory::LikelyLiberalized => "Likely liberalized",
        }
    }

    /// Parse a category from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fair" => Some(FairnessCategory::Fair),
            "overpriced" => Some(FairnessCategory::Overpriced),
            "likely_liberalized" | "liberalized" => Some(FairnessCategory::LikelyLiberalized),
            _ => None,
        }
    }
}

impl fmt::Display for FairnessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FairnessCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid fairness category: {}", s))
    }
}

/// The three figures the classifier needs, validated once at the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentFigures {
    advertised_rent: f64,
    max_legal_rent: f64,
    wws_points: u32,
}

impl RentFigures {
    /// Validate and bundle classifier inputs.
    ///
    /// Rents must be finite and non-negative.
    pub fn new(advertised_rent: f64, max_legal_rent: f64, wws_points: u32) -> Result<Self, DomainError> {
        Ok(Self {
            advertised_rent: ensure_amount("advertisedRent", advertised_rent)?,
            max_legal_rent: ensure_amount("maxLegalRent", max_legal_rent)?,
            wws_points,
        })
    }

    /// Asking rent in euros per month
    pub fn advertised_rent(&self) -> f64 {
        self.advertised_rent
    }

    /// Legal ceiling rent in euros per month
    pub fn max_legal_rent(&self) -> f64 {
        self.max_legal_rent
    }

    /// WWS point score
    pub fn wws_points(&self) -> u32 {
        self.wws_points
    }
}

/// Outcome of a fairness classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessVerdict {
    /// Fairness category
    pub category: FairnessCategory,

    /// Display text explaining the category
    pub explanation: String,

    /// Absolute gap between advertised and maximum rent, unrounded.
    /// Absent for liberalized units and exact matches.
    #[serde(default, rename = "rentDifference", skip_serializing_if = "Option::is_none")]
    pub rent_difference: Option<f64>,
}

/// Classifier for rent fairness
///
/// Holds the liberalization threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FairnessClassifier {
    threshold: u32,
}

impl Default for FairnessClassifier {
    fn default() -> Self {
        Self::new(LIBERALIZATION_POINT_THRESHOLD)
    }
}

impl FairnessClassifier {
    /// Create a classifier with a custom liberalization threshold
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Inclusive liberalization threshold in WWS points
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Validate raw figures and classify them
    pub fn classify(
        &self,
        advertised_rent: f64,
        max_legal_rent: f64,
        wws_points: u32,
    ) -> Result<FairnessVerdict, DomainError> {
        let figures = RentFigures::new(advertised_rent, max_legal_rent, wws_points)?;
        Ok(self.classify_figures(&figures))
    }

    /// Classify already validated figures
    ///
    /// Precedence matters: the liberalization check wins over any rent
    /// comparison.
    pub fn classify_figures(&self, figures: &RentFigures) -> FairnessVerdict {
        let advertised = figures.advertised_rent;
        let maximum = figures.max_legal_rent;

        if figures.wws_points >= self.threshold {
            FairnessVerdict {
                category: FairnessCategory::LikelyLiberalized,
                explanation: format!(
                    "Likely in liberalized sector (WWS points: {} ≥ {}). Max legal rent is indicative.",
                    figures.wws_points, self.threshold
                ),
                rent_difference: None,
            }
        } else if advertised > maximum {
            let difference = advertised - maximum;
            FairnessVerdict {
                category: FairnessCategory::Overpriced,
                explanation: format!("This is {} above the max legal rent.", format_euros(difference)),
                rent_difference: Some(difference),
            }
        } else if advertised < maximum {
            let difference = maximum - advertised;
            FairnessVerdict {
                category: FairnessCategory::Fair,
                explanation: format!(
                    "This is {} below the max legal rent. Good deal!",
                    format_euros(difference)
                ),
                rent_difference: Some(difference),
            }
        } else {
            FairnessVerdict {
                category: FairnessCategory::Fair,
                explanation: "Priced exactly at the max legal rent.".to_string(),
                rent_difference: None,
            }
        }
    }
}

/// Classify with the default threshold
///
/// # Examples
///
/// ```
/// use rentright_domain::{classify, FairnessCategory};
///
/// let verdict = classify(1100.0, 850.20, 125).unwrap();
/// assert_eq!(verdict.category, FairnessCategory::Overpriced);
/// assert_eq!(verdict.explanation, "This is €249.80 above the max legal rent.");
/// ```
pub fn classify(
    advertised_rent: f64,
    max_legal_rent: f64,
    wws_points: u32,
) -> Result<FairnessVerdict, DomainError> {
    FairnessClassifier::default().classify(advertised_rent, max_legal_rent, wws_points)
}

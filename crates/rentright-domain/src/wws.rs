//! Simplified WWS (Woningwaarderingsstelsel) point calculator
//!
//! The real point tables are published yearly by the Dutch government and
//! cover far more property features. This module scores four inputs and maps
//! the total onto a linear rent model:
//!
//! - Surface area: one point per square meter
//! - Energy label: fixed points per label (A++ through D)
//! - WOZ value: three points per €10,000 of assessed value
//! - Rooms: flat base points when the unit has any rooms
//!
//! Maximum legal rent = points × 7.50 + 50.00, rounded to cents.

use crate::error::{ensure_amount, DomainError};
use crate::money::{format_whole_euros, round_cents};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Points per square meter of surface area
pub const POINTS_PER_SQ_METER: f64 = 1.0;

/// WWS points per €10,000 of WOZ value
pub const WOZ_POINTS_PER_10K: f64 = 3.0;

/// Points awarded when the unit has at least one room
pub const BASE_POINTS_ROOMS: u32 = 5;

/// Euros of monthly rent per WWS point
pub const RENT_FACTOR_PER_POINT: f64 = 7.50;

/// Base monthly rent added to the per-point amount
pub const RENT_BASE: f64 = 50.00;

/// Energy efficiency label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyLabel {
    /// A++
    APlusPlus,
    /// A+
    APlus,
    /// A
    A,
    /// B
    B,
    /// C
    C,
    /// D
    D,
}

impl EnergyLabel {
    /// Get the label as printed on the certificate
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyLabel::APlusPlus => "A++",
            EnergyLabel::APlus => "A+",
            EnergyLabel::A => "A",
            EnergyLabel::B => "B",
            EnergyLabel::C => "C",
            EnergyLabel::D => "D",
        }
    }

    /// Parse a label, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "A++" => Some(EnergyLabel::APlusPlus),
            "A+" => Some(EnergyLabel::APlus),
            "A" => Some(EnergyLabel::A),
            "B" => Some(EnergyLabel::B),
            "C" => Some(EnergyLabel::C),
            "D" => Some(EnergyLabel::D),
            _ => None,
        }
    }

    /// Points this label contributes
    pub fn points(&self) -> u32 {
        match self {
            EnergyLabel::APlusPlus => 40,
            EnergyLabel::APlus => 35,
            EnergyLabel::A => 30,
            EnergyLabel::B => 20,
            EnergyLabel::C => 10,
            EnergyLabel::D => 5,
        }
    }
}

impl fmt::Display for EnergyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw property characteristics scored by the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WwsInput {
    /// Living area in square meters
    pub size_m2: f64,

    /// Number of rooms
    pub rooms: u32,

    /// Energy label as advertised; unknown labels score zero
    #[serde(default)]
    pub energy_label: Option<String>,

    /// WOZ value in euros
    #[serde(default)]
    pub woz_value: Option<f64>,
}

/// One line of a point breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
    /// Description of the scored feature
    pub item: String,

    /// Points awarded
    pub points: u32,
}

impl BreakdownItem {
    fn new(item: impl Into<String>, points: u32) -> Self {
        Self {
            item: item.into(),
            points,
        }
    }
}

/// Full WWS assessment of a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WwsAssessment {
    /// Total point score
    pub points: u32,

    /// Maximum legal monthly rent in euros
    pub max_rent: f64,

    /// Per-feature breakdown, always in the same four-item order
    pub breakdown: Vec<BreakdownItem>,
}

/// Tunable scoring and rent-model parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PointTable {
    /// Points per square meter
    pub points_per_sq_meter: f64,
    /// Points per €10,000 WOZ value
    pub woz_points_per_10k: f64,
    /// Flat points when rooms > 0
    pub base_points_rooms: u32,
    /// Euros of rent per point
    pub rent_factor_per_point: f64,
    /// Base rent in euros
    pub rent_base: f64,
}

impl Default for PointTable {
    fn default() -> Self {
        Self {
            points_per_sq_meter: POINTS_PER_SQ_METER,
            woz_points_per_10k: WOZ_POINTS_PER_10K,
            base_points_rooms: BASE_POINTS_ROOMS,
            rent_factor_per_point: RENT_FACTOR_PER_POINT,
            rent_base: RENT_BASE,
        }
    }
}

/// WWS point calculator
#[derive(Debug, Clone, Default)]
pub struct WwsCalculator {
    table: PointTable,
}

impl WwsCalculator {
    /// Create a calculator with a custom point table
    pub fn new(table: PointTable) -> Self {
        Self { table }
    }

    /// The point table in use
    pub fn table(&self) -> &PointTable {
        &self.table
    }

    /// Score a unit, returning total points and the per-feature breakdown
    pub fn calculate_points(&self, input: &WwsInput) -> Result<(u32, Vec<BreakdownItem>), DomainError> {
        let size = ensure_amount("size_m2", input.size_m2)?;
        let woz = input
            .woz_value
            .map(|w| ensure_amount("woz_value", w))
            .transpose()?;

        let mut breakdown = Vec::with_capacity(4);

        // 1. Surface area
        let surface_points = scored_points("size_m2", size * self.table.points_per_sq_meter)?;
        breakdown.push(BreakdownItem::new(
            format!("Surface Area ({} m²)", size),
            surface_points,
        ));

        // 2. Energy label
        match input.energy_label.as_deref().and_then(EnergyLabel::parse) {
            Some(label) => breakdown.push(BreakdownItem::new(
                format!("Energy Label ({})", label),
                label.points(),
            )),
            None => breakdown.push(BreakdownItem::new("Energy Label (Not specified or invalid)", 0)),
        }

        // 3. WOZ value
        match woz.filter(|w| *w > 0.0) {
            Some(woz) => {
                let woz_points =
                    scored_points("woz_value", woz * self.table.woz_points_per_10k / 10_000.0)?;
                breakdown.push(BreakdownItem::new(
                    format!("WOZ Value ({})", format_whole_euros(woz)),
                    woz_points,
                ));
            }
            None => breakdown.push(BreakdownItem::new("WOZ Value (Not specified)", 0)),
        }

        // 4. Rooms
        let room_points = if input.rooms > 0 {
            self.table.base_points_rooms
        } else {
            0
        };
        breakdown.push(BreakdownItem::new(
            format!("Number of Rooms ({})", input.rooms),
            room_points,
        ));

        let total = breakdown
            .iter()
            .try_fold(0u32, |acc, b| acc.checked_add(b.points))
            .ok_or_else(|| {
                let field = if breakdown[2].points > breakdown[0].points {
                    "woz_value"
                } else {
                    "size_m2"
                };
                DomainError::invalid(field, "total WWS points exceed the supported range")
            })?;
        Ok((total, breakdown))
    }

    /// Map a point score onto the maximum legal monthly rent
    pub fn max_legal_rent(&self, points: u32) -> f64 {
        if points == 0 {
            return 0.0;
        }
        round_cents(points as f64 * self.table.rent_factor_per_point + self.table.rent_base)
    }

    /// Score a unit and derive its maximum legal rent
    pub fn assess(&self, input: &WwsInput) -> Result<WwsAssessment, DomainError> {
        let (points, breakdown) = self.calculate_points(input)?;
        Ok(WwsAssessment {
            points,
            max_rent: self.max_legal_rent(points),
            breakdown,
        })
    }
}

/// Truncate a component score, rejecting values that do not fit in `u32`
fn scored_points(field: &'static str, raw: f64) -> Result<u32, DomainError> {
    let points = raw.trunc();
    if points > u32::MAX as f64 {
        return Err(DomainError::invalid(
            field,
            format!("{} points exceed the supported range", points),
        ));
    }
    Ok(points as u32)
}

/// Score a unit with the default point table
pub fn calculate_points(input: &WwsInput) -> Result<(u32, Vec<BreakdownItem>), DomainError> {
    WwsCalculator::default().calculate_points(input)
}

/// Maximum legal rent for a point score under the default rent model
pub fn max_legal_rent(points: u32) -> f64 {
    WwsCalculator::default().max_legal_rent(points)
}

/// Full assessment with the default point table
///
/// # Examples
///
/// ```
/// use rentright_domain::wws::{assess, WwsInput};
///
/// let input = WwsInput {
///     size_m2: 75.0,
///     rooms: 3,
///     energy_label: Some("A".to_string()),
///     woz_value: Some(300_000.0),
/// };
/// let assessment = assess(&input).unwrap();
/// assert_eq!(assessment.points, 200);
/// assert_eq!(assessment.max_rent, 1550.0);
/// ```
pub fn assess(input: &WwsInput) -> Result<WwsAssessment, DomainError> {
    WwsCalculator::default().assess(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> WwsInput {
        WwsInput {
            size_m2: 75.0,
            rooms: 3,
            energy_label: Some("B".to_string()),
            woz_value: Some(300_000.0),
        }
    }

    #[test]
    fn test_calculate_points() {
        let (total, breakdown) = calculate_points(&sample_input()).unwrap();

        // 75 surface + 20 label B + 90 WOZ + 5 rooms
        assert_eq!(total, 190);
        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown[0], BreakdownItem::new("Surface Area (75 m²)", 75));
        assert_eq!(breakdown[1], BreakdownItem::new("Energy Label (B)", 20));
        assert_eq!(breakdown[2], BreakdownItem::new("WOZ Value (€300,000)", 90));
        assert_eq!(breakdown[3], BreakdownItem::new("Number of Rooms (3)", 5));
    }

    #[test]
    fn test_max_legal_rent() {
        assert_eq!(max_legal_rent(140), 1100.0);
        assert_eq!(max_legal_rent(100), 800.0);
        assert_eq!(max_legal_rent(0), 0.0);
    }

    #[test]
    fn test_assess_different_label() {
        let mut input = sample_input();
        input.energy_label = Some("a".to_string());

        let assessment = assess(&input).unwrap();
        assert_eq!(assessment.points, 200);
        assert_eq!(assessment.max_rent, 1550.0);
        assert_eq!(assessment.breakdown[1].item, "Energy Label (A)");
    }

    #[test]
    fn test_unknown_label_scores_zero() {
        let mut input = sample_input();
        input.energy_label = Some("Z".to_string());

        let assessment = assess(&input).unwrap();
        assert_eq!(assessment.points, 170);
        assert_eq!(assessment.breakdown[1].item, "Energy Label (Not specified or invalid)");
        assert_eq!(assessment.breakdown[1].points, 0);
    }

    #[test]
    fn test_missing_optional_inputs() {
        let input = WwsInput {
            size_m2: 45.5,
            rooms: 0,
            energy_label: None,
            woz_value: None,
        };

        let assessment = assess(&input).unwrap();
        assert_eq!(assessment.points, 45);
        assert_eq!(assessment.breakdown[0].item, "Surface Area (45.5 m²)");
        assert_eq!(assessment.breakdown[2].item, "WOZ Value (Not specified)");
        assert_eq!(assessment.breakdown[3].points, 0);
        assert_eq!(assessment.max_rent, 387.5);
    }

    #[test]
    fn test_zero_woz_not_scored() {
        let mut input = sample_input();
        input.woz_value = Some(0.0);
        let (_, breakdown) = calculate_points(&input).unwrap();
        assert_eq!(breakdown[2].item, "WOZ Value (Not specified)");
    }

    #[test]
    fn test_invalid_input_rejected() {
        let mut input = sample_input();
        input.size_m2 = -10.0;
        assert!(matches!(
            assess(&input),
            Err(DomainError::InvalidInput { field: "size_m2", .. })
        ));

        let mut input = sample_input();
        input.woz_value = Some(f64::NAN);
        assert!(matches!(
            assess(&input),
            Err(DomainError::InvalidInput { field: "woz_value", .. })
        ));
    }

    #[test]
    fn test_huge_size_rejected() {
        let input = WwsInput {
            size_m2: 5.0e9,
            rooms: 2,
            energy_label: Some("A".to_string()),
            woz_value: None,
        };
        assert!(matches!(
            assess(&input),
            Err(DomainError::InvalidInput { field: "size_m2", .. })
        ));
    }

    #[test]
    fn test_huge_woz_rejected() {
        let mut input = sample_input();
        input.woz_value = Some(1.0e18);
        assert!(matches!(
            assess(&input),
            Err(DomainError::InvalidInput { field: "woz_value", .. })
        ));
    }

    #[test]
    fn test_total_overflow_rejected() {
        // each component fits on its own, the sum does not
        let input = WwsInput {
            size_m2: 4.0e9,
            rooms: 1,
            energy_label: None,
            woz_value: Some(1.0e12),
        };
        assert!(matches!(
            assess(&input),
            Err(DomainError::InvalidInput { field: "size_m2", .. })
        ));
    }

    #[test]
    fn test_custom_table() {
        let calculator = WwsCalculator::new(PointTable {
            rent_factor_per_point: 10.0,
            rent_base: 0.0,
            ..PointTable::default()
        });
        assert_eq!(calculator.max_legal_rent(100), 1000.0);
        assert_eq!(calculator.table().base_points_rooms, 5);
    }

    #[test]
    fn test_energy_label_parsing() {
        assert_eq!(EnergyLabel::parse(" a++ "), Some(EnergyLabel::APlusPlus));
        assert_eq!(EnergyLabel::parse("A+"), Some(EnergyLabel::APlus));
        assert_eq!(EnergyLabel::parse("E"), None);
        assert_eq!(EnergyLabel::D.points(), 5);
    }
}

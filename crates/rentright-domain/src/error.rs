//! Domain error types

use thiserror::Error;

/// Errors raised by domain operations.
///
/// Input problems are never coerced into defaults.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required value is missing or outside its valid range
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl DomainError {
    /// Shorthand for building an `InvalidInput` error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Error for a field that must be present but is not.
    pub fn missing(field: &'static str) -> Self {
        Self::invalid(field, "value is missing")
    }
}

/// Check that an amount is finite and not negative.
pub(crate) fn ensure_amount(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value < 0.0 {
        return Err(DomainError::invalid(field, format!("{} is negative", value)));
    }
    Ok(value)
}

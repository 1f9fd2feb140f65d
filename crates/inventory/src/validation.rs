//! Input validation for ingredient names, units and quantities.
//!
//! Every helper here is pure: it takes the raw text the operator typed and
//! returns either a validated value or a [`DomainError::Validation`] whose
//! message is ready to be shown as-is.

use bakery_core::{DomainError, DomainResult};

use crate::record::{IngredientKey, Unit};

pub const EMPTY_NAME: &str = "Ingredient name cannot be empty. Please try again";
pub const INVALID_NAME: &str = "Invalid ingredient name. Please use alphabetic characters only.";
pub const INVALID_UNIT: &str = "Invalid unit. Please use alphabetic characters only.";
pub const INVALID_NUMBER: &str = "Invalid input. Please enter a valid number.";
pub const NEGATIVE_QUANTITY: &str = "Quantity cannot be negative. Please try again.";

/// Trim surrounding whitespace and lowercase.
///
/// Fails when nothing is left after trimming.
pub fn normalize_name(raw: &str) -> DomainResult<String> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(DomainError::validation(EMPTY_NAME));
    }
    Ok(normalized)
}

/// True iff `s` is non-empty and every character is an alphabetic letter.
pub fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

/// Normalize a name and require it to be alphabetic.
pub fn validate_name(raw: &str) -> DomainResult<IngredientKey> {
    let normalized = normalize_name(raw)?;
    if !is_alphabetic(&normalized) {
        return Err(DomainError::validation(INVALID_NAME));
    }
    Ok(IngredientKey::from_normalized(normalized))
}

/// Trim a unit and require it to be alphabetic. Case is preserved.
pub fn validate_unit(raw: &str) -> DomainResult<Unit> {
    let unit = raw.trim();
    if !is_alphabetic(unit) {
        return Err(DomainError::validation(INVALID_UNIT));
    }
    Ok(Unit::from_validated(unit.to_string()))
}

/// Parse a real number, rejecting negatives unless `allow_negative`.
///
/// `NaN` and infinities parse as `f64` but are rejected as invalid input.
pub fn parse_quantity(raw: &str, allow_negative: bool) -> DomainResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| DomainError::validation(INVALID_NUMBER))?;
    if !value.is_finite() {
        return Err(DomainError::validation(INVALID_NUMBER));
    }
    if !allow_negative && value < 0.0 {
        return Err(DomainError::validation(NEGATIVE_QUANTITY));
    }
    Ok(value)
}

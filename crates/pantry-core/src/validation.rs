//! # Validation Module
//!
//! Input validation utilities for Pantry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal Shell (apps/cli)                                    │
//! │  ├── Reads raw text from the operator                                  │
//! │  └── Parses numeric fields via parse_quantity                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE + the store                                      │
//! │  ├── Field-level rules (empty name/unit/term, sign checks)             │
//! │  └── Re-checked by the store before any mutation                       │
//! │                                                                         │
//! │  The store re-validates so no caller can bypass an invariant.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pantry_core::validation::{parse_quantity, validate_ingredient_name};
//!
//! // Parse the raw prompt text before calling add/update
//! let qty = parse_quantity("2.5").unwrap();
//!
//! // Validate the name before touching the store
//! validate_ingredient_name("Flour").unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates an ingredient name.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Example
/// ```rust
/// use pantry_core::validation::validate_ingredient_name;
///
/// assert!(validate_ingredient_name("Brown Sugar").is_ok());
/// assert!(validate_ingredient_name("   ").is_err());
/// ```
pub fn validate_ingredient_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    Ok(())
}

/// Validates a unit label.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Otherwise free-form: "kg", "litres", "pieces" are all fine
pub fn validate_unit(unit: &str) -> ValidationResult<()> {
    if unit.trim().is_empty() {
        return Err(ValidationError::EmptyUnit);
    }

    Ok(())
}

/// Validates a search term.
///
/// ## Rules
/// - Must not be empty after trimming (an empty term is an error, unlike an
///   empty result set, which is a valid "no matches" outcome)
///
/// ## Returns
/// The trimmed term.
pub fn validate_search_term(term: &str) -> ValidationResult<&str> {
    let term = term.trim();

    if term.is_empty() {
        return Err(ValidationError::EmptySearchTerm);
    }

    Ok(term)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses raw prompt text into a quantity.
///
/// ## Rules
/// - Must parse as a real number ("2", "2.5", "-1" all parse)
/// - Must be finite: "inf" and "NaN" parse as f64 but are not quantities,
///   so they are rejected here rather than poisoning the store invariant
///
/// Sign checks happen separately ([`validate_new_quantity`] /
/// [`validate_updated_quantity`]) because add and update disagree on zero.
///
/// ## Example
/// ```rust
/// use pantry_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(" 2.5 ").unwrap(), 2.5);
/// assert!(parse_quantity("ten").is_err());
/// assert!(parse_quantity("NaN").is_err());
/// ```
pub fn parse_quantity(raw: &str) -> ValidationResult<f64> {
    let trimmed = raw.trim();

    let value: f64 = trimmed.parse().map_err(|_| ValidationError::InvalidNumber {
        raw: trimmed.to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::InvalidNumber {
            raw: trimmed.to_string(),
        });
    }

    Ok(value)
}

/// Validates the quantity for a NEW record.
///
/// ## Rules
/// - Must be strictly positive (> 0): adding zero stock makes no sense
pub fn validate_new_quantity(quantity: f64) -> ValidationResult<()> {
    if !quantity.is_finite() {
        return Err(ValidationError::InvalidNumber {
            raw: quantity.to_string(),
        });
    }

    if quantity <= 0.0 {
        return Err(ValidationError::NonPositiveQuantity { value: quantity });
    }

    Ok(())
}

/// Validates the quantity for an UPDATE.
///
/// ## Rules
/// - May be zero (ran out of flour) but never negative
pub fn validate_updated_quantity(quantity: f64) -> ValidationResult<()> {
    if !quantity.is_finite() {
        return Err(ValidationError::InvalidNumber {
            raw: quantity.to_string(),
        });
    }

    if quantity < 0.0 {
        return Err(ValidationError::NegativeQuantity { value: quantity });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ingredient_name() {
        assert!(validate_ingredient_name("Flour").is_ok());
        assert!(validate_ingredient_name("  Brown Sugar ").is_ok());

        assert!(validate_ingredient_name("").is_err());
        assert!(validate_ingredient_name("   ").is_err());
    }

    #[test]
    fn test_validate_unit() {
        assert!(validate_unit("kg").is_ok());
        assert!(validate_unit("fluid ounces").is_ok());

        assert_eq!(validate_unit(" "), Err(ValidationError::EmptyUnit));
    }

    #[test]
    fn test_validate_search_term_trims() {
        assert_eq!(validate_search_term("  sugar ").unwrap(), "sugar");
        assert_eq!(
            validate_search_term("\t"),
            Err(ValidationError::EmptySearchTerm)
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("10").unwrap(), 10.0);
        assert_eq!(parse_quantity("2.5").unwrap(), 2.5);
        assert_eq!(parse_quantity(" -3 ").unwrap(), -3.0); // sign checked later

        assert!(parse_quantity("ten").is_err());
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("1.2.3").is_err());
    }

    #[test]
    fn test_parse_quantity_rejects_non_finite() {
        assert!(parse_quantity("inf").is_err());
        assert!(parse_quantity("-inf").is_err());
        assert!(parse_quantity("NaN").is_err());
    }

    #[test]
    fn test_validate_new_quantity() {
        assert!(validate_new_quantity(0.1).is_ok());
        assert!(validate_new_quantity(999.0).is_ok());

        assert_eq!(
            validate_new_quantity(0.0),
            Err(ValidationError::NonPositiveQuantity { value: 0.0 })
        );
        assert!(validate_new_quantity(-1.0).is_err());
    }

    #[test]
    fn test_validate_updated_quantity() {
        assert!(validate_updated_quantity(0.0).is_ok()); // ran out is fine
        assert!(validate_updated_quantity(7.0).is_ok());

        assert_eq!(
            validate_updated_quantity(-0.5),
            Err(ValidationError::NegativeQuantity { value: -0.5 })
        );
    }
}

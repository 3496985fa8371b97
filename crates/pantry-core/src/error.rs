//! # Error Types
//!
//! Domain-specific error types for pantry-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pantry-core errors (this file)                                        │
//! │  ├── CoreError        - Domain failures (duplicate, not found)         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → shell prints Display message      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is recoverable: the shell reports it and returns to the menu.
//! No error corrupts store state, and no operation partially applies -
//! validation fully precedes mutation.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (name, raw input, value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations against the current
/// contents of the store. They should be caught and translated to
/// user-friendly messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// An ingredient with the same case-insensitive name already exists.
    ///
    /// ## When This Occurs
    /// - Adding "flour" when "Flour" is already stored
    ///
    /// The store never silently overwrites; the shell may offer to redirect
    /// the operator to the update flow instead.
    #[error("Ingredient '{name}' is already in the inventory")]
    DuplicateIngredient { name: String },

    /// No ingredient matches the given name (case-insensitive).
    #[error("Ingredient '{name}' not found in inventory")]
    NotFound { name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// Used for early validation before any store mutation runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Ingredient name is missing or blank after trimming.
    #[error("Ingredient name cannot be empty")]
    EmptyName,

    /// Unit label is missing or blank after trimming.
    #[error("Unit cannot be empty")]
    EmptyUnit,

    /// Search term is missing or blank after trimming.
    #[error("Search term cannot be empty")]
    EmptySearchTerm,

    /// Raw text did not parse to a finite real number.
    #[error("'{raw}' is not a valid number")]
    InvalidNumber { raw: String },

    /// Quantity for a new record must be strictly positive.
    #[error("Quantity must be positive (got {value})")]
    NonPositiveQuantity { value: f64 },

    /// Quantity for an update may be zero but never negative.
    #[error("Quantity cannot be negative (got {value})")]
    NegativeQuantity { value: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DuplicateIngredient {
            name: "Flour".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Ingredient 'Flour' is already in the inventory"
        );

        let err = CoreError::NotFound {
            name: "Saffron".to_string(),
        };
        assert_eq!(err.to_string(), "Ingredient 'Saffron' not found in inventory");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Ingredient name cannot be empty"
        );

        let err = ValidationError::InvalidNumber {
            raw: "ten".to_string(),
        };
        assert_eq!(err.to_string(), "'ten' is not a valid number");

        let err = ValidationError::NegativeQuantity { value: -2.5 };
        assert_eq!(err.to_string(), "Quantity cannot be negative (got -2.5)");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::EmptyUnit;
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

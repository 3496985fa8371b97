//! # Domain Types
//!
//! Core domain types used throughout Pantry.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │   IngredientRecord   │          │    QuantityUpdate    │            │
//! │  │  ──────────────────  │          │  ──────────────────  │            │
//! │  │  id (UUID)           │          │  record (snapshot)   │            │
//! │  │  name (business key) │          │  previous_quantity   │            │
//! │  │  quantity (f64 ≥ 0)  │          └──────────────────────┘            │
//! │  │  unit (non-empty)    │                                              │
//! │  └──────────────────────┘                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every record has:
//! - `id`: UUID v4 - immutable, never reused, not consulted by lookups
//! - Business key: the ingredient name, compared case-insensitively

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Ingredient Record
// =============================================================================

/// One ingredient held in the bakery's stock.
///
/// ## Identity
/// Records are identified by their name, compared case-insensitively:
/// "Flour" and "flour" denote the same entry. The name keeps the casing the
/// operator first typed, and that casing is what all listings display.
///
/// ## Invariants (enforced by the store)
/// - `quantity` is finite and ≥ 0 (> 0 at creation, updates may reach 0)
/// - `unit` is a non-empty string
/// - `name` and `unit` are immutable after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name exactly as first entered.
    pub name: String,

    /// Stock on hand, in `unit`s.
    pub quantity: f64,

    /// Free-form unit label ("kg", "litres", "pieces", ...).
    pub unit: String,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the quantity was last changed.
    pub updated_at: DateTime<Utc>,
}

impl IngredientRecord {
    /// Returns the normalized lookup key for this record's name.
    #[inline]
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Normalizes an ingredient name for case-insensitive identity.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Unicode lowercase, so "Crème" and "crème" collide as they should
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

// =============================================================================
// Quantity Update
// =============================================================================

/// The outcome of a quantity update, carrying both sides of the transition.
///
/// The shell uses this to report "Flour: 10 → 7.5 kg" without a second
/// lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityUpdate {
    /// Snapshot of the record after the update was applied.
    pub record: IngredientRecord,

    /// Quantity before the update.
    pub previous_quantity: f64,
}

impl QuantityUpdate {
    /// Quantity after the update (convenience accessor).
    #[inline]
    pub fn new_quantity(&self) -> f64 {
        self.record.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Flour"), "flour");
        assert_eq!(normalize_name("  Brown Sugar  "), "brown sugar");
        assert_eq!(normalize_name("CRÈME"), "crème");
    }

    #[test]
    fn test_record_key_matches_normalized_name() {
        let record = IngredientRecord {
            id: "00000000-0000-0000-0000-000000000000".to_string(),
            name: "Vanilla Extract".to_string(),
            quantity: 0.25,
            unit: "litres".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(record.key(), "vanilla extract");
    }

    #[test]
    fn test_record_json_round_trip() {
        let record = IngredientRecord {
            id: "00000000-0000-0000-0000-000000000001".to_string(),
            name: "Flour".to_string(),
            quantity: 10.0,
            unit: "kg".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: IngredientRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

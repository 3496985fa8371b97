//! # Inventory Store
//!
//! The in-memory, insertion-ordered ingredient store.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Store Operations                           │
//! │                                                                         │
//! │  Menu Choice              Shell Call               Store Change         │
//! │  ───────────              ──────────               ────────────         │
//! │                                                                         │
//! │  Add New Ingredient ────► store.add() ───────────► records.push(rec)   │
//! │                                                                         │
//! │  View All ──────────────► store.list() ──────────► (read only)         │
//! │                                                                         │
//! │  Search ────────────────► store.search() ────────► (read only)         │
//! │                                                                         │
//! │  Update Quantity ───────► store.update() ────────► records[i].quantity │
//! │                                                                         │
//! │  NOTE: There is no delete operation. Records live until process exit.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Storage Layout
//! Records live in a `Vec` so listings preserve insertion order, with a
//! side index from normalized (lowercased, trimmed) name to position for
//! O(1) case-insensitive lookup. Nothing is ever removed, so positions are
//! stable and the index never needs compaction.
//!
//! ## Ownership
//! The store assumes exclusive single-threaded ownership by the session's
//! shell. There is no interior mutability and no locking; a multi-client
//! embedding would need to wrap the whole store in its own mutex.

use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::{normalize_name, IngredientRecord, QuantityUpdate};
use crate::validation::{
    validate_ingredient_name, validate_new_quantity, validate_search_term, validate_unit,
    validate_updated_quantity,
};

// =============================================================================
// Inventory Store
// =============================================================================

/// The bakery's in-memory ingredient inventory.
///
/// ## Invariants
/// - At most one record per case-insensitive name
/// - Every stored quantity is finite and ≥ 0
/// - Every stored unit is non-empty
/// - Iteration order is insertion order, always
///
/// ## Lifecycle
/// Created empty at process start, discarded at exit. Records are created
/// only by [`add`](Self::add), mutated only by [`update`](Self::update)
/// (quantity field only), and never deleted.
#[derive(Debug, Default)]
pub struct InventoryStore {
    /// Records in insertion order.
    records: Vec<IngredientRecord>,

    /// Normalized name → position in `records`.
    index: HashMap<String, usize>,
}

impl InventoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        InventoryStore {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds a new ingredient to the inventory.
    ///
    /// ## Validation Order
    /// 1. `name` non-empty after trimming
    /// 2. `quantity` strictly positive (parsing of raw text happens in the
    ///    shell via [`crate::validation::parse_quantity`])
    /// 3. `unit` non-empty after trimming
    /// 4. no case-insensitive name collision
    ///
    /// ## Duplicate Policy
    /// A collision signals [`CoreError::DuplicateIngredient`]; the store
    /// never silently overwrites. Whether to redirect the operator to the
    /// update flow is the shell's decision.
    ///
    /// ## Returns
    /// A clone of the stored record, with the name's original casing
    /// preserved for display.
    pub fn add(&mut self, name: &str, quantity: f64, unit: &str) -> CoreResult<IngredientRecord> {
        validate_ingredient_name(name)?;
        validate_new_quantity(quantity)?;
        validate_unit(unit)?;

        let name = name.trim();
        let key = normalize_name(name);
        if self.index.contains_key(&key) {
            return Err(CoreError::DuplicateIngredient {
                name: name.to_string(),
            });
        }

        let now = Utc::now();
        let record = IngredientRecord {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            quantity,
            unit: unit.trim().to_string(),
            created_at: now,
            updated_at: now,
        };

        debug!(name = %record.name, quantity, unit = %record.unit, "ingredient added");

        self.index.insert(key, self.records.len());
        self.records.push(record.clone());
        Ok(record)
    }

    /// Returns all records in insertion order.
    ///
    /// An empty store yields an empty slice; that is a valid outcome, not an
    /// error.
    pub fn list(&self) -> &[IngredientRecord] {
        &self.records
    }

    /// Searches for ingredients whose name contains `term`.
    ///
    /// ## Match Policy
    /// Case-insensitive **substring** match - not exact, not prefix-only.
    /// Searching "FLOUR" finds a record named "flour", and "sug" finds
    /// "Brown Sugar". Results come back in insertion order.
    ///
    /// An empty result set is a valid "no matches" outcome; only an empty
    /// `term` is an error.
    pub fn search(&self, term: &str) -> CoreResult<Vec<&IngredientRecord>> {
        let term = validate_search_term(term)?;
        let needle = term.to_lowercase();

        let matches: Vec<&IngredientRecord> = self
            .records
            .iter()
            .filter(|record| record.name.to_lowercase().contains(&needle))
            .collect();

        debug!(term = %term, matches = matches.len(), "inventory searched");
        Ok(matches)
    }

    /// Updates the quantity of an existing ingredient.
    ///
    /// ## Validation Order
    /// 1. `name` non-empty after trimming
    /// 2. record exists under case-insensitive match
    /// 3. `new_quantity` ≥ 0 (zero is allowed: the bakery ran out)
    ///
    /// ## Effect
    /// Replaces only the `quantity` field (and touches `updated_at`); name
    /// casing and unit are untouched, and no other record is affected.
    /// Validation fully precedes mutation, so a failed update leaves the
    /// store exactly as it was.
    pub fn update(&mut self, name: &str, new_quantity: f64) -> CoreResult<QuantityUpdate> {
        validate_ingredient_name(name)?;

        let key = normalize_name(name);
        let position = *self.index.get(&key).ok_or_else(|| CoreError::NotFound {
            name: name.trim().to_string(),
        })?;

        validate_updated_quantity(new_quantity)?;

        let record = &mut self.records[position];
        let previous_quantity = record.quantity;
        record.quantity = new_quantity;
        record.updated_at = Utc::now();

        debug!(
            name = %record.name,
            previous = previous_quantity,
            new = new_quantity,
            "quantity updated"
        );

        Ok(QuantityUpdate {
            record: record.clone(),
            previous_quantity,
        })
    }

    /// Looks up a record by case-insensitive name match.
    ///
    /// Read-only helper for callers that need to probe existence before
    /// collecting more input (the update flow asks for the new quantity
    /// only after the record is known to exist).
    pub fn get(&self, name: &str) -> Option<&IngredientRecord> {
        let key = normalize_name(name);
        self.index.get(&key).map(|&position| &self.records[position])
    }

    /// Returns the number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

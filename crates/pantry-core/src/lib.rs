//! # pantry-core: Pure Business Logic for Pantry
//!
//! This crate is the **heart** of Pantry, the Sweet Surrender Bakery
//! ingredient tracker. It contains all business logic as pure functions and
//! plain data types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Pantry Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal Shell (apps/cli)                    │   │
//! │  │    Menu Loop ──► Prompts ──► Field Parsing ──► Table Output    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pantry-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   store   │  │ validation│  │   error   │  │   │
//! │  │   │ Ingredient│  │ Inventory │  │   rules   │  │ CoreError │  │   │
//! │  │   │  Record   │  │   Store   │  │  checks   │  │Validation │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (IngredientRecord, QuantityUpdate)
//! - [`store`] - The in-memory, insertion-ordered inventory store
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and quantity parsing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic and synchronous
//! 2. **No I/O**: Console, file system, and network access are FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Single Owner**: The store assumes exclusive single-threaded ownership;
//!    any multi-client embedding must add its own synchronization
//!
//! ## Example Usage
//!
//! ```rust
//! use pantry_core::InventoryStore;
//!
//! let mut store = InventoryStore::new();
//!
//! // Names are compared case-insensitively, displayed as first typed
//! store.add("Flour", 10.0, "kg").unwrap();
//! assert!(store.add("flour", 5.0, "kg").is_err()); // duplicate
//!
//! // Quantity updates find the record regardless of casing
//! let change = store.update("FLOUR", 7.5).unwrap();
//! assert_eq!(change.previous_quantity, 10.0);
//! assert_eq!(change.record.quantity, 7.5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pantry_core::InventoryStore` instead of
// `use pantry_core::store::InventoryStore`

pub use error::{CoreError, CoreResult, ValidationError};
pub use store::InventoryStore;
pub use types::{IngredientRecord, QuantityUpdate};

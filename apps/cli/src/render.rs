//! # Table Rendering
//!
//! Formats record listings as the fixed-width tables the operator sees.
//!
//! ## Example Output
//! ```text
//! Ingredient      Quantity   Unit
//! -----------------------------------
//! Flour           10         kg
//! Brown Sugar     2.5        kg
//! Eggs            120        pieces
//! ```

use pantry_core::IngredientRecord;

/// Minimum width of the name column.
const NAME_COL_MIN: usize = 15;

/// Width of the quantity column.
const QTY_COL: usize = 10;

/// Formats a sequence of records as a table, insertion order preserved.
///
/// Names display exactly as first typed. The name column widens to fit the
/// longest name so nothing gets truncated.
pub fn format_table(records: &[&IngredientRecord]) -> String {
    let name_col = records
        .iter()
        .map(|r| r.name.len() + 1)
        .max()
        .unwrap_or(0)
        .max(NAME_COL_MIN);

    let mut table = String::new();
    table.push_str(&format!(
        "{:<nw$} {:<qw$} {}\n",
        "Ingredient",
        "Quantity",
        "Unit",
        nw = name_col,
        qw = QTY_COL
    ));
    table.push_str(&"-".repeat(name_col + QTY_COL + 10));
    table.push('\n');

    for record in records {
        table.push_str(&format!(
            "{:<nw$} {:<qw$} {}\n",
            record.name,
            format_quantity(record.quantity),
            record.unit,
            nw = name_col,
            qw = QTY_COL
        ));
    }

    table
}

/// Formats a quantity without a trailing `.0` for whole values.
///
/// `f64`'s Display already does this ("10", "2.5"), so this is a thin
/// wrapper kept as the single place to change if display rules evolve.
pub fn format_quantity(quantity: f64) -> String {
    format!("{quantity}")
}

// =============================================================================
// Unit Tests
// =============================================================================

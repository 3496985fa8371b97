//! # Menu Shell
//!
//! The interactive read-validate-mutate-print loop.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Menu Loop                                         │
//! │                                                                         │
//! │  Welcome banner                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌── Draw menu ◄────────────────────────────────────┐                  │
//! │  │       │                                          │                  │
//! │  │       ▼                                          │                  │
//! │  │  Read choice ── 1 ──► Add flow ─────────┐        │                  │
//! │  │       │         2 ──► View All ─────────┤        │                  │
//! │  │       │         3 ──► Search ───────────┼──► Pause (Enter) ──┘      │
//! │  │       │         4 ──► Update ───────────┤                          │
//! │  │       │         ? ──► Hint ─────────────┘                          │
//! │  │       │                                                             │
//! │  │       └──────── 5 / EOF ──► Goodbye, return                        │
//! │  └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every store error is recoverable: the handler prints the error's Display
//! message and control falls back to the menu. The shell owns the store
//! outright - one operator, one thread, no mutex.

use std::io::{self, BufRead, Write};

use tracing::info;

use pantry_core::error::CoreError;
use pantry_core::validation::{
    parse_quantity, validate_ingredient_name, validate_new_quantity, validate_search_term,
    validate_unit,
};
use pantry_core::InventoryStore;

use crate::input::{confirm, prompt, MenuChoice};
use crate::render::{format_quantity, format_table};

/// The interactive shell driving one operator session.
///
/// Generic over its streams so tests can run whole sessions against byte
/// buffers.
pub struct Shell<R, W> {
    store: InventoryStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell with an empty inventory.
    pub fn new(input: R, output: W) -> Self {
        Shell {
            store: InventoryStore::new(),
            input,
            output,
        }
    }

    /// Runs the menu loop until the operator selects Exit (or input ends).
    pub fn run(&mut self) -> io::Result<()> {
        info!("inventory session started");
        writeln!(
            self.output,
            "Welcome to Sweet Surrender Bakery Inventory System!"
        )?;

        loop {
            self.draw_menu()?;

            let Some(choice) = prompt(&mut self.input, &mut self.output, "Enter your choice (1-5): ")?
            else {
                // Input stream exhausted; leave cleanly
                break;
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.handle_add()?,
                Some(MenuChoice::ViewAll) => self.handle_view_all()?,
                Some(MenuChoice::Search) => self.handle_search()?,
                Some(MenuChoice::Update) => self.handle_update()?,
                Some(MenuChoice::Exit) => break,
                None => {
                    writeln!(
                        self.output,
                        "Invalid choice. Please enter a number between 1 and 5."
                    )?;
                }
            }

            self.pause()?;
        }

        writeln!(self.output, "Thank you for using the inventory system!")?;
        info!("inventory session ended");
        Ok(())
    }

    // =========================================================================
    // Menu Entries
    // =========================================================================

    /// 1. Add New Ingredient.
    ///
    /// Prompts name, quantity, unit in that order, validating each field as
    /// entered. On a duplicate name, offers to jump to the update flow
    /// instead - the store itself never overwrites.
    fn handle_add(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Add New Ingredient ---")?;

        let name = self.read("Enter ingredient name: ")?;
        if let Err(err) = validate_ingredient_name(&name) {
            return writeln!(self.output, "Error: {err}");
        }

        let raw_quantity = self.read("Enter quantity: ")?;
        let quantity = match parse_quantity(&raw_quantity).and_then(|qty| {
            validate_new_quantity(qty)?;
            Ok(qty)
        }) {
            Ok(qty) => qty,
            Err(err) => return writeln!(self.output, "Error: {err}"),
        };

        let unit = self.read("Enter unit (kg, litres, pieces, etc.): ")?;
        if let Err(err) = validate_unit(&unit) {
            return writeln!(self.output, "Error: {err}");
        }

        match self.store.add(&name, quantity, &unit) {
            Ok(record) => writeln!(
                self.output,
                "✓ Added: {} - {} {}",
                record.name,
                format_quantity(record.quantity),
                record.unit
            ),
            Err(CoreError::DuplicateIngredient { name }) => {
                writeln!(
                    self.output,
                    "Ingredient '{name}' is already in the inventory."
                )?;
                let redirect = confirm(
                    &mut self.input,
                    &mut self.output,
                    "Update its quantity instead? (y/n): ",
                )?;
                if redirect {
                    self.apply_quantity_update(&name)?;
                }
                Ok(())
            }
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    /// 2. View All Ingredients.
    fn handle_view_all(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- All Ingredients ---")?;

        if self.store.is_empty() {
            return writeln!(self.output, "No ingredients in inventory yet.");
        }

        let records: Vec<_> = self.store.list().iter().collect();
        write!(self.output, "{}", format_table(&records))
    }

    /// 3. Search for Ingredient.
    ///
    /// Case-insensitive substring match; an empty result set is reported as
    /// "no matches", not as an error.
    fn handle_search(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Search Ingredient ---")?;

        let term = self.read("Enter ingredient name to search: ")?;
        if let Err(err) = validate_search_term(&term) {
            return writeln!(self.output, "Error: {err}");
        }

        match self.store.search(&term) {
            Ok(matches) if matches.is_empty() => {
                writeln!(self.output, "No ingredients matching '{}'.", term.trim())
            }
            Ok(matches) => write!(self.output, "{}", format_table(&matches)),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    /// 4. Update Ingredient Quantity.
    ///
    /// Probes existence before asking for the new quantity, so the operator
    /// isn't prompted for a number that could never apply.
    fn handle_update(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Update Ingredient Quantity ---")?;

        let name = self.read("Enter ingredient name to update: ")?;
        if let Err(err) = validate_ingredient_name(&name) {
            return writeln!(self.output, "Error: {err}");
        }

        if self.store.get(&name).is_none() {
            let err = CoreError::NotFound {
                name: name.trim().to_string(),
            };
            return writeln!(self.output, "Error: {err}");
        }

        self.apply_quantity_update(&name)
    }

    // =========================================================================
    // Shared Pieces
    // =========================================================================

    /// Prompts for and applies a new quantity to an existing ingredient.
    /// Shared by the update flow and the duplicate-add redirect.
    fn apply_quantity_update(&mut self, name: &str) -> io::Result<()> {
        let raw_quantity = self.read("Enter new quantity: ")?;
        let new_quantity = match parse_quantity(&raw_quantity) {
            Ok(qty) => qty,
            Err(err) => return writeln!(self.output, "Error: {err}"),
        };

        match self.store.update(name, new_quantity) {
            Ok(change) => writeln!(
                self.output,
                "✓ Updated {}: {} → {} {}",
                change.record.name,
                format_quantity(change.previous_quantity),
                format_quantity(change.new_quantity()),
                change.record.unit
            ),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    /// Reads one prompted line; EOF counts as an empty answer so the field
    /// validators report it and the flow unwinds back to the menu.
    fn read(&mut self, label: &str) -> io::Result<String> {
        Ok(prompt(&mut self.input, &mut self.output, label)?.unwrap_or_default())
    }

    fn draw_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "=".repeat(40))?;
        writeln!(self.output, "Sweet Surrender Bakery - Inventory System")?;
        writeln!(self.output, "{}", "=".repeat(40))?;
        writeln!(self.output, "1. Add New Ingredient")?;
        writeln!(self.output, "2. View All Ingredients")?;
        writeln!(self.output, "3. Search for Ingredient")?;
        writeln!(self.output, "4. Update Ingredient Quantity")?;
        writeln!(self.output, "5. Exit")?;
        writeln!(self.output, "{}", "=".repeat(40))
    }

    /// Waits for acknowledgment before redrawing the menu.
    fn pause(&mut self) -> io::Result<()> {
        prompt(
            &mut self.input,
            &mut self.output,
            "\nPress Enter to continue...",
        )?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests (scripted sessions)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Runs a whole session against scripted input and returns the output.
    fn run_session(lines: &[&str]) -> String {
        let script = lines.join("\n") + "\n";
        let mut shell = Shell::new(Cursor::new(script.into_bytes()), Vec::new());
        shell.run().unwrap();
        String::from_utf8(shell.output).unwrap()
    }

    #[test]
    fn test_add_then_view_all() {
        let output = run_session(&[
            "1", "Flour", "10", "kg", "", // add + pause
            "2", "", // view all + pause
            "5", // exit
        ]);

        assert!(output.contains("✓ Added: Flour - 10 kg"));
        assert!(output.contains("Ingredient"));
        assert!(output.contains("Flour"));
        assert!(output.contains("Thank you for using the inventory system!"));
    }

    #[test]
    fn test_view_all_on_empty_inventory() {
        let output = run_session(&["2", "", "5"]);
        assert!(output.contains("No ingredients in inventory yet."));
    }

    #[test]
    fn test_add_rejects_bad_quantity_before_asking_unit() {
        let output = run_session(&["1", "Flour", "ten", "", "5"]);

        assert!(output.contains("Error: 'ten' is not a valid number"));
        // The unit prompt never appears once the quantity is rejected
        assert!(!output.contains("Enter unit"));
    }

    #[test]
    fn test_duplicate_add_offers_update_redirect() {
        let output = run_session(&[
            "1", "Flour", "10", "kg", "", // add + pause
            "1", "flour", "5", "kg", "y", "7", "", // duplicate -> redirect -> pause
            "5",
        ]);

        assert!(output.contains("Ingredient 'flour' is already in the inventory."));
        assert!(output.contains("✓ Updated Flour: 10 → 7 kg"));
    }

    #[test]
    fn test_duplicate_add_redirect_declined() {
        let output = run_session(&[
            "1", "Sugar", "3", "kg", "", // add + pause
            "1", "SUGAR", "5", "kg", "n", "", // duplicate, decline + pause
            "2", "", // view all + pause
            "5",
        ]);

        // Original quantity survives the declined redirect
        assert!(output.contains("Sugar"));
        assert!(output.contains(" 3 "));
        assert!(!output.contains("✓ Updated"));
    }

    #[test]
    fn test_search_finds_case_insensitive_substring() {
        let output = run_session(&[
            "1", "flour", "10", "kg", "", // add + pause
            "3", "FLOUR", "", // search + pause
            "5",
        ]);

        assert!(output.contains("flour"));
        assert!(!output.contains("No ingredients matching"));
    }

    #[test]
    fn test_search_reports_no_matches() {
        let output = run_session(&["3", "saffron", "", "5"]);
        assert!(output.contains("No ingredients matching 'saffron'."));
    }

    #[test]
    fn test_update_missing_ingredient_reports_not_found() {
        let output = run_session(&["4", "Ghost", "", "5"]);

        assert!(output.contains("Error: Ingredient 'Ghost' not found in inventory"));
        // Existence is probed before the quantity prompt
        assert!(!output.contains("Enter new quantity"));
    }

    #[test]
    fn test_update_rejects_negative_quantity() {
        let output = run_session(&[
            "1", "Sugar", "2", "kg", "", // add + pause
            "4", "Sugar", "-1", "", // update + pause
            "2", "", // view all + pause
            "5",
        ]);

        assert!(output.contains("Error: Quantity cannot be negative (got -1)"));
        assert!(output.contains(" 2 ")); // store unchanged
    }

    #[test]
    fn test_invalid_menu_choice_prints_hint() {
        let output = run_session(&["9", "", "5"]);
        assert!(output.contains("Invalid choice. Please enter a number between 1 and 5."));
    }

    #[test]
    fn test_eof_terminates_session() {
        // No explicit "5": the stream just ends at the menu prompt
        let output = run_session(&["2", ""]);
        assert!(output.contains("Thank you for using the inventory system!"));
    }
}

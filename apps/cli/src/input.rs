//! # Input Helpers
//!
//! Prompting and raw-text handling for the shell.
//!
//! All reads go through a generic `BufRead` so the whole shell can be
//! driven by a scripted byte buffer in tests - no terminal required.

use std::io::{self, BufRead, Write};

// =============================================================================
// Menu Choice
// =============================================================================

/// The fixed menu the operator loops over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Add New Ingredient
    Add,
    /// 2. View All Ingredients
    ViewAll,
    /// 3. Search for Ingredient
    Search,
    /// 4. Update Ingredient Quantity
    Update,
    /// 5. Exit
    Exit,
}

impl MenuChoice {
    /// Parses the operator's raw menu input.
    ///
    /// Returns `None` for anything outside 1-5; the shell prints a hint and
    /// redraws the menu.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::ViewAll),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Update),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

// =============================================================================
// Prompting
// =============================================================================

/// Prints `label`, flushes, and reads one line of input.
///
/// ## EOF Handling
/// Returns `None` when the input stream is exhausted (piped input or
/// Ctrl-D). Callers treat this like choosing Exit so the loop always
/// terminates.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }

    // Strip the trailing newline but keep inner whitespace; field-level
    // trimming is the validators' job
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(Some(line))
}

/// Asks a yes/no question. Anything other than "y"/"yes" counts as no.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<bool> {
    match prompt(input, output, label)?.as_deref() {
        Some(answer) => Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")),
        None => Ok(false),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::Exit));

        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("add"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_prompt_reads_one_line() {
        let mut input = Cursor::new(b"Flour\nSugar\n".to_vec());
        let mut output = Vec::new();

        let line = prompt(&mut input, &mut output, "Name: ").unwrap();
        assert_eq!(line.as_deref(), Some("Flour"));
        assert_eq!(String::from_utf8(output).unwrap(), "Name: ");
    }

    #[test]
    fn test_prompt_strips_crlf() {
        let mut input = Cursor::new(b"10.5\r\n".to_vec());
        let mut output = Vec::new();

        let line = prompt(&mut input, &mut output, "> ").unwrap();
        assert_eq!(line.as_deref(), Some("10.5"));
    }

    #[test]
    fn test_prompt_returns_none_on_eof() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        assert_eq!(prompt(&mut input, &mut output, "> ").unwrap(), None);
    }

    #[test]
    fn test_confirm() {
        let mut output = Vec::new();

        let mut input = Cursor::new(b"y\n".to_vec());
        assert!(confirm(&mut input, &mut output, "? ").unwrap());

        let mut input = Cursor::new(b"YES\n".to_vec());
        assert!(confirm(&mut input, &mut output, "? ").unwrap());

        let mut input = Cursor::new(b"n\n".to_vec());
        assert!(!confirm(&mut input, &mut output, "? ").unwrap());

        let mut input = Cursor::new(Vec::new());
        assert!(!confirm(&mut input, &mut output, "? ").unwrap());
    }
}

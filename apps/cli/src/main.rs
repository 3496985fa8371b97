//! # Pantry Terminal Application Entry Point
//!
//! This is the main entry point for the interactive inventory shell.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pantry Terminal Shell                            │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Operator (stdin/stdout)                       │  │
//! │  │  • Types menu choices    • Reads tables and prompts              │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    This Crate                                    │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Sets up logging, builds the shell, runs it       │  │
//! │  │                                                                  │  │
//! │  │  shell.rs ───► Menu loop + one handler per menu entry           │  │
//! │  │                                                                  │  │
//! │  │  input.rs ───► Prompt helpers, menu choice parsing              │  │
//! │  │                                                                  │  │
//! │  │  render.rs ──► Tabular formatting of record listings            │  │
//! │  │                                                                  │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 pantry-core::InventoryStore                      │  │
//! │  │  In-memory for one session; nothing is persisted at exit         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Create an empty InventoryStore, owned directly by the shell
//!    (single operator, single thread - no mutex needed)
//! 3. Run the menu loop until the operator selects Exit

mod input;
mod render;
mod shell;

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use shell::Shell;

fn main() -> ExitCode {
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pantry: terminal I/O failed: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pantry_core=trace` - Trace store operations only
/// - Default: WARN, so log lines don't interleave with the interactive UI
///
/// Events go to stderr; stdout belongs to the menu.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

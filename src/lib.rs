//! Cliput library crate
//!
//! This crate provides the core functionality for the `cliput` CLI. It is
//! organized into small modules: `session` (scoped clipboard access with
//! throwing and non-throwing operation forms), `backend` (the platform seam,
//! real and in-memory), `edit` (the interactive stdin edit loop), and `error`
//! (the failure taxonomy). The binary `src/main.rs` calls `cliput_lib::run()`
//! to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `ClipboardSession` — reusable clipboard wrapper for embedding callers.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod backend;
pub mod edit;
pub mod error;
pub mod session;

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::tty::IsTty;

pub use crate::error::ClipboardError;
pub use crate::session::ClipboardSession;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replace the clipboard text
    Edit {
        /// New clipboard text; when omitted, lines are read from stdin until
        /// a line containing a NUL byte or end of input
        text: Option<String>,
    },
}

/// Run the cliput CLI.
///
/// Dispatch:
/// - no arguments — print the current clipboard text to stdout,
///   newline-terminated;
/// - `edit <text>` — set the clipboard text to `<text>` verbatim;
/// - `edit` — interactive: the first stdin line replaces the clipboard,
///   each further line is appended with a `\n` separator, and a line
///   containing a NUL byte stops the loop.
///
/// Any failure prints one `ERROR: <diagnostic>` line to stderr (red on a
/// tty, prior style restored) and exits with a non-zero code.
pub fn run() {
    let cli = Cli::parse();
    let mut session = ClipboardSession::new();
    let result = match cli.command {
        None => session.get_text().map(|text| println!("{text}")),
        Some(Commands::Edit { text: Some(text) }) => session.set_text(&text),
        Some(Commands::Edit { text: None }) => {
            let stdin = io::stdin();
            edit::edit_from_reader(&mut session, stdin.lock())
        }
    };
    if let Err(e) = result {
        report_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Print `ERROR: <message>` to stderr, styled red when stderr is a tty.
/// Styling is cosmetic only; the text written is identical either way.
fn report_error(message: &str) {
    let mut stderr = io::stderr();
    if stderr.is_tty() {
        let _ = execute!(
            stderr,
            SetForegroundColor(Color::Red),
            Print(format!("ERROR: {message}\n")),
            ResetColor
        );
    } else {
        let _ = writeln!(stderr, "ERROR: {message}");
    }
}

//! Interactive translation mode.
//!
//! A REPL-style interface with slash commands; plain input is translated in
//! the active direction.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{Repl, ReplConfig};

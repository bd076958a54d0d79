//! # qtr - SQL ⟷ MongoDB Query Translation Client
//!
//! `qtr` sends SQL statements or MongoDB shell commands to a translation
//! service and shows what comes back. The service does the actual
//! translation; this crate owns the session around it: which direction is
//! selected, what is in flight, and the log of past translations.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file of SQL
//! qtr ./query.sql
//!
//! # Translate a MongoDB command from stdin
//! echo 'db.users.find({}, {"name": 1})' | qtr -r
//!
//! # Interactive session
//! qtr interactive
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/qtr/config.toml`:
//!
//! ```toml
//! [qtr]
//! endpoint = "http://localhost:5000"
//! timeout_secs = 30
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// In-memory translation history.
pub mod history;

/// Input reading from files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Interactive translation mode.
pub mod repl;

/// Translation session state and request tracking.
pub mod session;

/// Translation service client.
pub mod translation;

/// Terminal UI components (spinner, colors, prompt helpers).
pub mod ui;

/// Rendering and user intents.
pub mod view;

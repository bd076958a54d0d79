//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Interactive mode command handler.
pub mod interactive;

/// One-shot translation command handler.
pub mod translate;

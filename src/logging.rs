//! Diagnostic logging.
//!
//! Diagnostics go to stderr through `tracing`. `RUST_LOG` wins when set;
//! otherwise `--verbose` selects debug output for this crate, `--quiet` keeps
//! only errors and the default shows warnings. Colors follow the global
//! output configuration, so call [`crate::output::init`] first.

use tracing_subscriber::EnvFilter;

use crate::output;

fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "qtr_cli=debug"
    } else if quiet {
        "qtr_cli=error"
    } else {
        "qtr_cli=warn"
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, output::is_quiet())));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!output::is_no_color())
        .with_target(false)
        .try_init();
}

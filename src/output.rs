//! Global output configuration.
//!
//! - Translation results go to stdout (for piping)
//! - Status messages and diagnostics go to stderr
//! - Quiet mode suppresses status messages and the spinner
//! - Colors can be disabled via `--no-color` or the `NO_COLOR` environment variable

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl OutputConfig {
    /// Builds the configuration from CLI flags, honoring `NO_COLOR`.
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: no_color || Self::default().no_color,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }
}

/// Initialize the global output configuration.
///
/// Only the first call has an effect.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status message to stderr (respects quiet mode).
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_no_color_env_is_honored() {
        let original = std::env::var_os("NO_COLOR");
        unsafe { std::env::set_var("NO_COLOR", "1") };

        assert!(OutputConfig::default().no_color);
        assert!(OutputConfig::from_flags(false, false).no_color);

        match original {
            Some(val) => unsafe { std::env::set_var("NO_COLOR", val) },
            None => unsafe { std::env::remove_var("NO_COLOR") },
        }
    }

    #[test]
    #[serial]
    fn test_flags_without_env() {
        let original = std::env::var_os("NO_COLOR");
        unsafe { std::env::remove_var("NO_COLOR") };

        let config = OutputConfig::from_flags(true, false);
        assert!(config.quiet);
        assert!(!config.no_color);
        assert!(OutputConfig::from_flags(false, true).no_color);

        if let Some(val) = original {
            unsafe { std::env::set_var("NO_COLOR", val) };
        }
    }
}

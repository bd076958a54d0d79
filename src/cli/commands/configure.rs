//! Configure command handler for editing connection defaults.

use anyhow::{Result, bail};
use inquire::Text;
use inquire::validator::Validation;

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, QtrConfig,
    validate_endpoint,
};
use crate::status;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the config file location and current values.
/// Otherwise prompts for the endpoint and timeout and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default()?;
        print_config_file(&manager, &config);
        return Ok(());
    }

    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_values(&config);

    let endpoint = prompt_endpoint(config.qtr.endpoint.as_deref())?;
    let timeout_secs = prompt_timeout(config.qtr.timeout_secs)?;

    config.qtr = QtrConfig {
        endpoint: Some(endpoint),
        timeout_secs: Some(timeout_secs),
    };
    manager.save(&config)?;

    status!();
    status!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_config_file(manager: &ConfigManager, config: &ConfigFile) {
    println!(
        "{}  {}",
        Style::label("path"),
        Style::secondary(manager.config_path().display())
    );
    println!();
    print_current_values(config);
}

fn print_current_values(config: &ConfigFile) {
    println!("{}", Style::header("Current settings"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config.qtr.endpoint.as_deref().map_or_else(
            || format!("{} {}", Style::value(DEFAULT_ENDPOINT), Style::default_marker()),
            Style::value
        )
    );
    println!(
        "  {}   {}",
        Style::label("timeout"),
        config.qtr.timeout_secs.map_or_else(
            || format!(
                "{} {}",
                Style::value(format!("{DEFAULT_TIMEOUT_SECS}s")),
                Style::default_marker()
            ),
            |secs| Style::value(format!("{secs}s"))
        )
    );
    println!();
}

fn prompt_endpoint(current: Option<&str>) -> Result<String> {
    let endpoint = Text::new("Translation service endpoint:")
        .with_default(current.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("Base URL; /translate and /reverse are appended")
        .with_validator(|input: &str| {
            Ok(match validate_endpoint(input.trim()) {
                Ok(()) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;

    Ok(endpoint.trim().to_string())
}

fn prompt_timeout(current: Option<u64>) -> Result<u64> {
    let default = current.unwrap_or(DEFAULT_TIMEOUT_SECS).to_string();
    let input = Text::new("Request timeout (seconds):")
        .with_default(&default)
        .with_validator(|input: &str| {
            Ok(match parse_timeout(input) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;

    parse_timeout(&input)
}

fn parse_timeout(input: &str) -> Result<u64> {
    let Ok(secs) = input.trim().parse::<u64>() else {
        bail!("Timeout must be a whole number of seconds");
    };
    if secs == 0 {
        bail!("Timeout must be at least 1 second");
    }
    Ok(secs)
}

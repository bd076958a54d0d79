//! Interactive mode UI components.

use crate::session::SessionState;
use crate::translation::Direction;
use crate::ui::Style;

use super::command::SLASH_COMMANDS;
use super::session::ReplConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &ReplConfig) {
    println!(
        "{} {} - SQL ⟷ MongoDB Query Translator",
        Style::header("qtr"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::secondary(format!("Connected to {}", config.endpoint))
    );
    println!();
}

pub fn print_waiting(pending: usize) {
    println!(
        "{}",
        Style::secondary(format!(
            "Waiting for {pending} unfinished translation(s), Ctrl+C to discard"
        ))
    );
}

pub fn print_goodbye(abandoned: usize) {
    if abandoned > 0 {
        println!(
            "{}",
            Style::warning(format!(
                "Discarding {abandoned} unfinished translation(s)"
            ))
        );
    }
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &ReplConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::value(&config.endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("timeout"),
        Style::value(format!("{}s", config.timeout.as_secs()))
    );
    println!();
}

pub fn print_status(state: &SessionState) {
    println!("{}", Style::header("Status"));
    for direction in Direction::ALL {
        let marker = if direction == state.direction() { "❯" } else { " " };
        let busy = if state.is_busy(direction) {
            Style::warning(" (translating)")
        } else {
            String::new()
        };
        println!(
            "  {} {}{}",
            Style::success(marker),
            Style::value(direction),
            busy
        );

        let input = state.input(direction);
        if input.is_empty() {
            println!("      {}", Style::secondary("(empty)"));
        } else {
            for line in input.lines() {
                println!("      {line}");
            }
        }
    }
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for (cmd, desc) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{cmd:<9}")),
            Style::secondary(desc)
        );
    }
    println!();
    println!(
        "  {}",
        Style::hint("Any other input is translated in the current direction.")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

use inquire::autocompletion::{Autocomplete, Replacement};

use crate::translation::Direction;

// Available slash commands: (command, description)
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/sql", "Translate SQL to MongoDB"),
    ("/mongo", "Translate MongoDB to SQL"),
    ("/switch", "Switch translation direction"),
    ("/draft", "Set the input without submitting"),
    ("/submit", "Submit the current input"),
    ("/history", "Show or hide the translation history"),
    ("/load", "Restore a history entry"),
    ("/clear", "Clear the translation history"),
    ("/copy", "Print the bare result for copying"),
    ("/status", "Show inputs and pending requests"),
    ("/config", "Show current configuration"),
    ("/help", "Show available commands"),
    ("/quit", "Exit interactive mode"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') || input.contains(char::is_whitespace) {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Direction(Direction),
    Switch,
    Draft(String),
    Submit,
    History,
    /// One-based history entry number as typed by the user.
    Load(Option<usize>),
    Clear,
    Copy,
    Status,
    Config,
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// A query to translate in the active direction.
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));

    let command = match name {
        "sql" => SlashCommand::Direction(Direction::SqlToDoc),
        "mongo" => SlashCommand::Direction(Direction::DocToSql),
        "switch" => SlashCommand::Switch,
        "draft" => SlashCommand::Draft(rest.to_string()),
        "submit" => SlashCommand::Submit,
        "history" => SlashCommand::History,
        "load" => SlashCommand::Load(rest.parse().ok().filter(|n| *n > 0)),
        "clear" => SlashCommand::Clear,
        "copy" => SlashCommand::Copy,
        "status" => SlashCommand::Status,
        "config" => SlashCommand::Config,
        "help" => SlashCommand::Help,
        "quit" | "exit" | "q" => SlashCommand::Quit,
        _ => SlashCommand::Unknown(cmd.to_string()),
    };

    Input::Command(command)
}

//! One-shot translation of a file or stdin.

use anyhow::{Result, bail};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::ConnectionArgs;
use crate::config::{ConfigManager, resolve_config};
use crate::input::read_query;
use crate::session::TranslationSession;
use crate::translation::{Direction, TranslationClient, TranslationOutcome, Translator};
use crate::status;
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub file: Option<PathBuf>,
    pub direction: Direction,
    pub connection: ConnectionArgs,
}

/// Translates one query and prints the result to stdout.
///
/// Returns the outcome so the caller can pick an exit status.
pub async fn run_translate(options: TranslateOptions) -> Result<TranslationOutcome> {
    let manager = ConfigManager::new()?;
    let config = resolve_config(
        &options.connection.resolve_options(),
        &manager.load_or_default()?,
    )?;

    let query = read_query(options.file.as_deref())?;
    if query.trim().is_empty() {
        bail!("Input is empty");
    }

    let client = TranslationClient::new(config.endpoint.clone(), config.timeout)?;
    let outcome = translate_once(client, options.direction, query).await?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", outcome.text())?;
    stdout.flush()?;

    if outcome.is_failure() {
        status!(
            "{}",
            Style::hint(format!(
                "Is the translation service running at {}? Set another with --endpoint or `qtr configure`.",
                config.endpoint
            ))
        );
    }

    Ok(outcome)
}

/// Runs a single submission through a fresh session.
pub async fn translate_once<T: Translator + 'static>(
    translator: T,
    direction: Direction,
    query: String,
) -> Result<TranslationOutcome> {
    let mut session = TranslationSession::new(translator);
    session.set_direction(direction);
    session.edit_input(direction, query);

    if !session.submit() {
        bail!("Input is empty");
    }

    let spinner = Spinner::new(&format!("Translating {direction}..."));
    let completed = session.next_completion().await;
    spinner.stop();

    match (completed, session.state().outcome()) {
        (Some(_), Some(outcome)) => Ok(outcome.clone()),
        _ => bail!("Translation finished without a result"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct UpperTranslator;

    impl Translator for UpperTranslator {
        async fn translate(&self, _direction: Direction, text: &str) -> TranslationOutcome {
            TranslationOutcome::success(text.to_uppercase())
        }
    }

    #[tokio::test]
    async fn test_translate_once_returns_outcome() {
        let outcome = translate_once(UpperTranslator, Direction::DocToSql, "db.t.find()".to_string())
            .await
            .unwrap();

        assert_eq!(outcome, TranslationOutcome::success("DB.T.FIND()"));
    }

    #[tokio::test]
    async fn test_translate_once_rejects_blank_query() {
        let result = translate_once(UpperTranslator, Direction::SqlToDoc, "  \n".to_string()).await;
        assert!(result.is_err());
    }
}

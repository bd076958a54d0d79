use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Text};
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::session::TranslationSession;
use crate::translation::{Direction, TranslationClient, Translator};
use crate::ui::is_prompt_cancelled;
use crate::view::{Intent, SessionView, TerminalView, dispatch, prompt_message, submit_enabled};

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Base address of the translation service.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Direction selected at startup.
    pub direction: Direction,
}

type PromptResult = Result<String, InquireError>;

/// An interactive translation session.
///
/// The prompt runs on a blocking thread; this side owns the
/// [`TranslationSession`] and interleaves user input with request
/// completions, so queries can be typed while others are in flight.
pub struct Repl<T, W: Write = io::Stdout> {
    config: ReplConfig,
    session: TranslationSession<T>,
    view: TerminalView<W>,
}

impl Repl<TranslationClient> {
    /// Creates a session backed by the HTTP translation service.
    pub fn connect(config: ReplConfig) -> Result<Self> {
        let client = TranslationClient::new(config.endpoint.clone(), config.timeout)?;
        Ok(Self::new(config, client))
    }
}

impl<T: Translator + 'static> Repl<T> {
    pub fn new(config: ReplConfig, translator: T) -> Self {
        Self::with_view(config, translator, TerminalView::new())
    }
}

impl<T: Translator + 'static, W: Write> Repl<T, W> {
    pub fn with_view(config: ReplConfig, translator: T, view: TerminalView<W>) -> Self {
        let mut session = TranslationSession::new(translator);
        session.set_direction(config.direction);

        Self {
            config,
            session,
            view,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);
        self.view.render(self.session.state(), self.session.history());

        let (prompt_tx, prompt_rx) = mpsc::unbounded_channel();
        let (line_tx, mut line_rx) = mpsc::unbounded_channel();
        let reader = tokio::task::spawn_blocking(move || read_lines(prompt_rx, line_tx));

        let mut keep_going = self.prompt(&prompt_tx);

        while keep_going {
            tokio::select! {
                line = line_rx.recv() => {
                    self.view.set_prompt(None);
                    keep_going = match line {
                        Some(Ok(line)) => self.handle_line(&line),
                        Some(Err(e)) if is_prompt_cancelled(&e) => {
                            println!(); // Clear line before goodbye message
                            false
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => false,
                    };

                    if keep_going {
                        keep_going = self.prompt(&prompt_tx);
                    }
                }
                Some(entry) = self.session.next_completion(), if self.session.has_pending() => {
                    debug!(direction = entry.direction().tag(), "rendering completed translation");
                    self.view.render(self.session.state(), self.session.history());
                }
            }
        }

        // Closing the prompt channel lets the reader thread finish.
        drop(prompt_tx);
        if let Err(e) = reader.await {
            debug!(error = %e, "prompt reader ended abnormally");
        }
        self.view.set_prompt(None);

        let abandoned = self.finish_pending().await;
        ui::print_goodbye(abandoned);
        Ok(())
    }

    /// Asks the reader thread for the next line.
    fn prompt(&mut self, prompts: &UnboundedSender<String>) -> bool {
        let message = prompt_message(self.session.state());
        self.view.set_prompt(Some(message.clone()));
        prompts.send(message).is_ok()
    }

    /// Lets in-flight requests complete before leaving.
    ///
    /// Ctrl+C stops waiting; returns how many requests were left unfinished.
    async fn finish_pending(&mut self) -> usize {
        if !self.session.has_pending() {
            return 0;
        }
        ui::print_waiting(self.session.pending_count());

        let interrupt = tokio::signal::ctrl_c();
        tokio::pin!(interrupt);

        while self.session.has_pending() {
            tokio::select! {
                _ = &mut interrupt => return self.session.pending_count(),
                Some(_) = self.session.next_completion() => {
                    self.view.render(self.session.state(), self.session.history());
                }
            }
        }
        0
    }

    /// Handles one line of user input. Returns `false` to end the session.
    fn handle_line(&mut self, line: &str) -> bool {
        match parse_input(line) {
            Input::Empty => true,
            Input::Text(text) => {
                let direction = self.session.state().direction();
                self.apply(Intent::EditInput(direction, text));
                self.submit();
                true
            }
            Input::Command(cmd) => self.handle_command(cmd),
        }
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Direction(direction) => self.apply(Intent::SwitchDirection(direction)),
            SlashCommand::Switch => {
                let direction = self.session.state().direction().toggled();
                self.apply(Intent::SwitchDirection(direction));
            }
            SlashCommand::Draft(text) => {
                let direction = self.session.state().direction();
                self.apply(Intent::EditInput(direction, text));
            }
            SlashCommand::Submit => self.submit(),
            SlashCommand::History => self.apply(Intent::ToggleHistory),
            SlashCommand::Load(Some(number)) => self.apply(Intent::SelectHistoryEntry(number - 1)),
            SlashCommand::Load(None) => ui::print_error("Usage: /load <n>"),
            SlashCommand::Clear => self.apply(Intent::ClearHistory),
            SlashCommand::Copy => self.apply(Intent::CopyResult),
            SlashCommand::Status => ui::print_status(self.session.state()),
            SlashCommand::Config => ui::print_config(&self.config),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }

    fn submit(&mut self) {
        let state = self.session.state();
        if submit_enabled(state) {
            self.apply(Intent::Submit);
            return;
        }

        let direction = state.direction();
        let message = if state.is_busy(direction) {
            format!("Still translating {direction}; input kept, use /submit once it finishes")
        } else {
            "Nothing to translate, type a query or use /draft".to_string()
        };
        self.view.hint(&message);
    }

    fn apply(&mut self, intent: Intent) {
        dispatch(&mut self.session, &mut self.view, intent);
    }
}

fn prompt_render_config() -> RenderConfig<'static> {
    let prompt_style = Styled::new("❯")
        .with_fg(Color::LightBlue)
        .with_attr(Attributes::BOLD);
    let mut render_config = RenderConfig::default()
        .with_prompt_prefix(prompt_style)
        .with_answered_prompt_prefix(prompt_style);

    // Non-highlighted suggestions: gray
    render_config.option = StyleSheet::new().with_fg(Color::Grey);
    // Highlighted suggestion: purple
    render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

    render_config
}

/// Shows one prompt per message received and forwards each answer.
///
/// Stops when the message channel closes, the answer channel closes, or the
/// prompt fails (including Ctrl+C).
fn read_lines(mut prompts: UnboundedReceiver<String>, lines: UnboundedSender<PromptResult>) {
    let render_config = prompt_render_config();

    while let Some(message) = prompts.blocking_recv() {
        let answer = Text::new(&message)
            .with_render_config(render_config)
            .with_autocomplete(SlashCommandCompleter)
            .with_help_message("Type a query to translate, /help for commands, Ctrl+C to quit")
            .prompt();

        let failed = answer.is_err();
        if lines.send(answer).is_err() || failed {
            break;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::TranslationOutcome;

    struct EchoTranslator;

    impl Translator for EchoTranslator {
        async fn translate(&self, direction: Direction, text: &str) -> TranslationOutcome {
            TranslationOutcome::success(format!("{}:{text}", direction.tag()))
        }
    }

    fn repl(direction: Direction) -> Repl<EchoTranslator, Vec<u8>> {
        let config = ReplConfig {
            endpoint: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
            direction,
        };
        Repl::with_view(config, EchoTranslator, TerminalView::with_writer(Vec::new()))
    }

    fn output(repl: Repl<EchoTranslator, Vec<u8>>) -> String {
        String::from_utf8(repl.view.into_inner()).unwrap()
    }

    #[test]
    fn test_start_direction_applied() {
        let repl = repl(Direction::DocToSql);
        assert_eq!(repl.session.state().direction(), Direction::DocToSql);
    }

    #[tokio::test]
    async fn test_text_line_edits_and_submits() {
        let mut repl = repl(Direction::SqlToDoc);

        assert!(repl.handle_line("SELECT * FROM users"));
        assert!(repl.session.state().is_busy(Direction::SqlToDoc));
        assert_eq!(repl.session.state().active_input(), "SELECT * FROM users");

        let entry = repl.session.next_completion().await.unwrap();
        assert_eq!(entry.output_text(), "sql:SELECT * FROM users");
    }

    #[tokio::test]
    async fn test_draft_then_submit_in_other_direction() {
        let mut repl = repl(Direction::SqlToDoc);

        repl.handle_line("/mongo");
        repl.handle_line("/draft db.users.find({}, {})");
        assert!(!repl.session.has_pending());

        repl.handle_line("/submit");
        let entry = repl.session.next_completion().await.unwrap();
        assert_eq!(entry.direction(), Direction::DocToSql);
        assert_eq!(entry.input_text(), "db.users.find({}, {})");
    }

    #[tokio::test]
    async fn test_load_restores_entry() {
        let mut repl = repl(Direction::SqlToDoc);

        repl.handle_line("SELECT 1");
        repl.session.next_completion().await.unwrap();
        repl.handle_line("/switch");
        repl.handle_line("/history");
        repl.handle_line("/load 1");

        let state = repl.session.state();
        assert_eq!(state.direction(), Direction::SqlToDoc);
        assert!(!state.history_visible());
        assert_eq!(repl.session.history().len(), 1);
    }

    #[tokio::test]
    async fn test_skipped_submit_is_a_hint_not_a_warning() {
        let mut repl = repl(Direction::SqlToDoc);

        repl.handle_line("SELECT 1");
        repl.handle_line("/submit");
        repl.handle_line("/mongo");
        repl.handle_line("/submit");
        assert_eq!(repl.session.pending_count(), 1);

        let text = output(repl);
        assert!(text.contains("Still translating SQL → MongoDB"));
        assert!(text.contains("Nothing to translate"));
        assert!(!text.contains("! "));
    }

    #[tokio::test]
    async fn test_pending_requests_finish_before_leaving() {
        let mut repl = repl(Direction::SqlToDoc);

        repl.handle_line("SELECT 1");
        repl.handle_line("/mongo");
        repl.handle_line("db.users.find({}, {})");
        assert_eq!(repl.session.pending_count(), 2);

        assert_eq!(repl.finish_pending().await, 0);
        assert!(!repl.session.has_pending());
        assert_eq!(repl.session.history().len(), 2);
        assert!(output(repl).contains("Result:"));
    }

    #[tokio::test]
    async fn test_nothing_to_wait_for() {
        let mut repl = repl(Direction::SqlToDoc);
        assert_eq!(repl.finish_pending().await, 0);
    }

    #[test]
    fn test_quit_ends_session() {
        let mut repl = repl(Direction::SqlToDoc);
        assert!(!repl.handle_line("/quit"));
        assert!(repl.handle_line("/bogus"));
    }
}

//! Line-oriented terminal rendering of a session.

use std::io::{self, Write};
use tracing::debug;

use super::SessionView;
use crate::history::{HistoryEntry, HistoryLog};
use crate::session::SessionState;
use crate::translation::{Direction, TranslationOutcome};
use crate::ui::Style;

const PREVIEW_WIDTH: usize = 60;

#[derive(Debug, Default)]
struct Rendered {
    state: SessionState,
    history_len: usize,
}

/// Prints what changed since the previous render.
///
/// A terminal cannot redraw a panel in place, so each render emits only the
/// transitions between the last rendered state and the new one: a switched
/// direction, a request starting, a new result, a loaded history entry, the
/// history panel opening or closing.
///
/// While an interactive prompt owns the terminal (raw mode, cursor on the
/// prompt line), output clears the prompt, uses explicit carriage returns and
/// leaves a copy of the prompt behind for the prompt to redraw over.
pub struct TerminalView<W: Write = io::Stdout> {
    out: W,
    last: Rendered,
    replayed: bool,
    active_prompt: Option<String>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalView<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: Rendered::default(),
            replayed: false,
            active_prompt: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Records the prompt currently shown, or `None` once it has returned.
    pub fn set_prompt(&mut self, message: Option<String>) {
        self.active_prompt = message;
    }

    /// Shows a dim, non-alarming remark.
    pub fn hint(&mut self, message: &str) {
        self.emit(&[Style::hint(message)]);
    }

    fn transition_lines(&self, state: &SessionState, history: &HistoryLog) -> Vec<String> {
        let prev = &self.last;
        let mut lines = Vec::new();

        if self.replayed {
            lines.push(format!(
                "{} Loaded {} entry",
                Style::success("↺"),
                Style::code(state.direction().history_label())
            ));
            lines.push(input_line(state.active_input()));
        } else if state.direction() != prev.state.direction() {
            lines.push(format!(
                "{} {}",
                Style::success("⇄"),
                Style::value(state.direction())
            ));
            if !state.active_input().is_empty() {
                lines.push(input_line(state.active_input()));
            }
        }

        for direction in Direction::ALL {
            if state.is_busy(direction) && !prev.state.is_busy(direction) {
                lines.push(Style::secondary(format!("Translating {direction}...")));
            }
        }

        let completed = history.len() > prev.history_len;
        if (self.replayed || completed || state.outcome() != prev.state.outcome())
            && let Some(outcome) = state.outcome()
        {
            lines.extend(result_lines(outcome));
        }

        if prev.history_len > 0 && history.is_empty() {
            lines.push(format!("{} History cleared", Style::success("✓")));
        }

        if state.history_visible() {
            if !prev.state.history_visible() || history.len() != prev.history_len {
                lines.extend(history_panel(history));
            }
        } else if prev.state.history_visible() {
            lines.push(Style::secondary("History closed"));
        }

        lines
    }

    fn emit(&mut self, lines: &[String]) {
        if lines.is_empty() {
            return;
        }

        let result = match &self.active_prompt {
            None => lines
                .iter()
                .try_for_each(|line| writeln!(self.out, "{line}")),
            Some(message) => write!(self.out, "\r\x1b[J")
                .and_then(|()| {
                    lines
                        .iter()
                        .try_for_each(|line| write!(self.out, "{line}\r\n"))
                })
                .and_then(|()| write!(self.out, "{} {message} ", Style::command("❯"))),
        }
        .and_then(|()| self.out.flush());

        if let Err(e) = result {
            debug!(error = %e, "failed to write to terminal");
        }
    }
}

impl<W: Write> SessionView for TerminalView<W> {
    fn render(&mut self, state: &SessionState, history: &HistoryLog) {
        let lines = self.transition_lines(state, history);
        self.replayed = false;
        self.last = Rendered {
            state: state.clone(),
            history_len: history.len(),
        };
        self.emit(&lines);
    }

    fn copy_result(&mut self, text: &str) {
        // No clipboard in a terminal: emit the bare text so it can be selected
        // or piped.
        self.emit(&[text.to_string()]);
    }

    fn notice(&mut self, message: &str) {
        self.emit(&[format!("{} {message}", Style::warning("!"))]);
    }

    fn entry_loaded(&mut self, _entry: &HistoryEntry) {
        self.replayed = true;
    }
}

/// Prompt text for the active direction; flags it while the submit control
/// is disabled by an in-flight request.
pub fn prompt_message(state: &SessionState) -> String {
    let direction = state.direction();
    if state.is_busy(direction) {
        format!("[{}] (translating)", direction.tag())
    } else {
        format!("[{}]", direction.tag())
    }
}

fn input_line(input: &str) -> String {
    format!("  {} {}", Style::label("input"), preview(input))
}

fn result_lines(outcome: &TranslationOutcome) -> Vec<String> {
    let mut lines = vec![Style::header("Result:")];
    lines.extend(outcome.text().lines().map(|line| {
        if outcome.is_failure() {
            format!("  {}", Style::error(line))
        } else {
            format!("  {}", Style::value(line))
        }
    }));
    lines.push(String::new());
    lines
}

fn history_panel(history: &HistoryLog) -> Vec<String> {
    let mut lines = vec![Style::header("Translation History")];

    if history.is_empty() {
        lines.push(format!("  {}", Style::secondary("No translations yet")));
    } else {
        lines.extend(
            history
                .all()
                .iter()
                .enumerate()
                .flat_map(|(i, entry)| history_entry_lines(i + 1, entry)),
        );
        lines.push(Style::hint(
            "  /load <n> restores an entry, /clear clears the history",
        ));
    }

    lines.push(String::new());
    lines
}

fn history_entry_lines(number: usize, entry: &HistoryEntry) -> [String; 2] {
    [
        format!(
            "  {:>3}. {}  {}",
            number,
            Style::code(entry.direction().history_label()),
            Style::secondary(entry.created_at().format("%Y-%m-%d %H:%M:%S"))
        ),
        format!("       {}", preview(entry.input_text())),
    ]
}

/// First line of `text`, shortened to fit one terminal row.
fn preview(text: &str) -> String {
    let first = text.lines().next().unwrap_or_default();
    let mut chars = first.chars();
    let head: String = chars.by_ref().take(PREVIEW_WIDTH).collect();

    if chars.next().is_some() || text.lines().nth(1).is_some() {
        format!("{head}…")
    } else {
        head
    }
}

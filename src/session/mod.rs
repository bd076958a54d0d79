//! The translation session state machine.
//!
//! A [`TranslationSession`] owns the [`SessionState`] and the [`HistoryLog`]
//! and exposes the only operations that may change them. Requests run as
//! futures polled by whoever owns the session, on a single logical thread;
//! completions are applied in the order they finish.

mod state;

use futures_util::StreamExt;
use futures_util::future::LocalBoxFuture;
use futures_util::stream::FuturesUnordered;
use std::rc::Rc;
use tracing::debug;

use crate::history::{HistoryEntry, HistoryLog};
use crate::translation::{Direction, TranslationOutcome, Translator};

pub use state::SessionState;

/// A finished request, waiting to be applied to the session.
struct Completion {
    direction: Direction,
    input_text: String,
    outcome: TranslationOutcome,
}

pub struct TranslationSession<T> {
    translator: Rc<T>,
    state: SessionState,
    history: HistoryLog,
    in_flight: FuturesUnordered<LocalBoxFuture<'static, Completion>>,
}

impl<T: Translator + 'static> TranslationSession<T> {
    pub fn new(translator: T) -> Self {
        Self {
            translator: Rc::new(translator),
            state: SessionState::default(),
            history: HistoryLog::new(),
            in_flight: FuturesUnordered::new(),
        }
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    pub const fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Whether any submitted request has not been applied yet.
    pub fn has_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Selects the active direction. In-flight requests are unaffected.
    pub fn set_direction(&mut self, direction: Direction) {
        self.state.direction = direction;
    }

    /// Replaces the input buffer of `direction`, busy or not.
    pub fn edit_input(&mut self, direction: Direction, text: impl Into<String>) {
        let text = text.into();
        if self.state.inputs[direction] != text {
            self.state.inputs[direction] = text;
        }
    }

    /// Submits the active buffer for translation.
    ///
    /// Returns `false` without touching any state when the buffer is blank or
    /// the active direction already has a request in flight. The previous
    /// outcome stays visible until this request completes.
    pub fn submit(&mut self) -> bool {
        let direction = self.state.direction;

        if self.state.pending[direction] {
            debug!(direction = direction.tag(), "submit skipped: request in flight");
            return false;
        }

        let input_text = self.state.inputs[direction].clone();
        if input_text.trim().is_empty() {
            debug!(direction = direction.tag(), "submit skipped: input is blank");
            return false;
        }

        self.state.pending[direction] = true;
        debug!(direction = direction.tag(), "submitting translation");

        let translator = Rc::clone(&self.translator);
        self.in_flight.push(Box::pin(async move {
            let outcome = translator.translate(direction, &input_text).await;
            Completion {
                direction,
                input_text,
                outcome,
            }
        }));

        true
    }

    /// Waits for the next request to finish and applies its outcome.
    ///
    /// Returns the history entry recorded for it, or `None` when nothing is in
    /// flight. Cancel-safe: dropping the future leaves every request queued.
    pub async fn next_completion(&mut self) -> Option<HistoryEntry> {
        let completion = self.in_flight.next().await?;
        Some(self.apply(completion))
    }

    fn apply(&mut self, completion: Completion) -> HistoryEntry {
        let Completion {
            direction,
            input_text,
            outcome,
        } = completion;

        debug!(
            direction = direction.tag(),
            failure = outcome.is_failure(),
            "translation completed"
        );

        let entry = HistoryEntry::new(direction, input_text, outcome.text().to_string());
        self.state.pending[direction] = false;
        self.state.outcome = Some(outcome);
        self.history.append(entry.clone());
        entry
    }

    pub fn toggle_history_visibility(&mut self) {
        self.state.history_visible = !self.state.history_visible;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Restores a past translation locally and closes the history panel.
    ///
    /// No request is made and nothing is appended to the history.
    pub fn load_history_entry(&mut self, entry: &HistoryEntry) {
        let direction = entry.direction();
        self.state.direction = direction;
        self.state.inputs[direction] = entry.input_text().to_string();
        self.state.outcome = Some(TranslationOutcome::success(entry.output_text()));
        self.state.history_visible = false;
    }
}

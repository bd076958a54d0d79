//! Presentation glue between user gestures and the session.
//!
//! Views hold no business state: they render [`SessionState`] and turn user
//! gestures into [`Intent`]s, which [`dispatch`] applies to the session.

mod terminal;

use crate::history::{HistoryEntry, HistoryLog};
use crate::session::{SessionState, TranslationSession};
use crate::translation::{Direction, Translator};

pub use terminal::{TerminalView, prompt_message};

/// A user gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Submit,
    SwitchDirection(Direction),
    EditInput(Direction, String),
    ToggleHistory,
    /// Zero-based index into the history log.
    SelectHistoryEntry(usize),
    ClearHistory,
    CopyResult,
}

/// Something that renders a session.
pub trait SessionView {
    /// Called after every change to the session.
    fn render(&mut self, state: &SessionState, history: &HistoryLog);

    /// Hands the current result text over for copying.
    fn copy_result(&mut self, text: &str);

    /// Shows a message that is not part of the session state.
    fn notice(&mut self, message: &str);

    /// Called just before the render that follows a history replay.
    fn entry_loaded(&mut self, _entry: &HistoryEntry) {}
}

/// Applies `intent` to `session` and re-renders `view`.
pub fn dispatch<T, V>(session: &mut TranslationSession<T>, view: &mut V, intent: Intent)
where
    T: Translator + 'static,
    V: SessionView + ?Sized,
{
    match intent {
        Intent::Submit => {
            session.submit();
        }
        Intent::SwitchDirection(direction) => session.set_direction(direction),
        Intent::EditInput(direction, text) => session.edit_input(direction, text),
        Intent::ToggleHistory => session.toggle_history_visibility(),
        Intent::SelectHistoryEntry(index) => {
            let Some(entry) = session.history().get(index).cloned() else {
                view.notice(&format!("No history entry #{}", index + 1));
                return;
            };
            session.load_history_entry(&entry);
            view.entry_loaded(&entry);
        }
        Intent::ClearHistory => session.clear_history(),
        Intent::CopyResult => {
            match session.state().outcome() {
                Some(outcome) => view.copy_result(outcome.text()),
                None => view.notice("Nothing to copy yet"),
            }
            return;
        }
    }

    view.render(session.state(), session.history());
}

/// Whether the submit control for the active direction should be enabled.
///
/// Only the active direction's own in-flight request disables it.
pub fn submit_enabled(state: &SessionState) -> bool {
    !state.is_busy(state.direction()) && !state.active_input().trim().is_empty()
}

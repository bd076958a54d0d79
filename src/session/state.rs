use crate::translation::{Direction, PerDirection, TranslationOutcome};

/// Everything a view needs to render the session.
///
/// Only [`TranslationSession`](super::TranslationSession) mutates this; views
/// get a shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(super) direction: Direction,
    pub(super) inputs: PerDirection<String>,
    pub(super) outcome: Option<TranslationOutcome>,
    pub(super) pending: PerDirection<bool>,
    pub(super) history_visible: bool,
}

impl SessionState {
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub fn input(&self, direction: Direction) -> &str {
        &self.inputs[direction]
    }

    /// Buffer of the currently selected direction.
    pub fn active_input(&self) -> &str {
        self.input(self.direction)
    }

    /// Outcome of the most recently completed (or replayed) translation.
    pub const fn outcome(&self) -> Option<&TranslationOutcome> {
        self.outcome.as_ref()
    }

    /// Whether a request for `direction` is in flight.
    pub fn is_busy(&self, direction: Direction) -> bool {
        self.pending[direction]
    }

    pub fn is_any_busy(&self) -> bool {
        Direction::ALL.into_iter().any(|d| self.pending[d])
    }

    pub const fn history_visible(&self) -> bool {
        self.history_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SessionState::default();

        assert_eq!(state.direction(), Direction::SqlToDoc);
        assert_eq!(state.input(Direction::SqlToDoc), "");
        assert_eq!(state.input(Direction::DocToSql), "");
        assert!(state.outcome().is_none());
        assert!(!state.is_any_busy());
        assert!(!state.history_visible());
    }
}

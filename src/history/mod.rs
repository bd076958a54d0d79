//! In-memory log of completed translations.
//!
//! The log lives for the process lifetime only. Entries are kept in the order
//! their requests completed and are never reordered or deduplicated.

use chrono::{DateTime, Local};

use crate::translation::Direction;

/// One completed translation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    direction: Direction,
    input_text: String,
    output_text: String,
    created_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(direction: Direction, input_text: String, output_text: String) -> Self {
        Self::with_timestamp(direction, input_text, output_text, Local::now())
    }

    pub const fn with_timestamp(
        direction: Direction,
        input_text: String,
        output_text: String,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            direction,
            input_text,
            output_text,
            created_at,
        }
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn output_text(&self) -> &str {
        &self.output_text
    }

    pub const fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

/// Ordered record of past translations, most recent last.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(input: &str, output: &str) -> HistoryEntry {
        HistoryEntry::new(Direction::SqlToDoc, input.to_string(), output.to_string())
    }

    #[test]
    fn test_append_preserves_order() {
        let mut log = HistoryLog::new();
        log.append(entry("SELECT a FROM t", "db.t.find({}, {\"a\": 1})"));
        log.append(entry("SELECT b FROM t", "db.t.find({}, {\"b\": 1})"));

        let inputs: Vec<_> = log.all().iter().map(HistoryEntry::input_text).collect();
        assert_eq!(inputs, ["SELECT a FROM t", "SELECT b FROM t"]);
        assert_eq!(log.last().map(HistoryEntry::input_text), Some("SELECT b FROM t"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut log = HistoryLog::new();
        log.append(entry("SELECT 1", "x"));
        log.append(entry("SELECT 1", "x"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log = HistoryLog::new();
        log.clear();
        assert!(log.is_empty());

        log.append(entry("SELECT 1", "x"));
        log.append(entry("SELECT 2", "y"));
        log.clear();
        assert!(log.is_empty());
        assert!(log.get(0).is_none());
    }
}

//! Translation directions and per-direction storage.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Which way a query is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// SQL in, MongoDB shell command out.
    #[default]
    SqlToDoc,
    /// MongoDB shell command in, SQL out.
    DocToSql,
}

impl Direction {
    pub const ALL: [Self; 2] = [Self::SqlToDoc, Self::DocToSql];

    /// Path of the remote endpoint, relative to the configured base address.
    pub const fn endpoint_path(self) -> &'static str {
        match self {
            Self::SqlToDoc => "translate",
            Self::DocToSql => "reverse",
        }
    }

    /// JSON field carrying the source query in the request body.
    pub const fn request_field(self) -> &'static str {
        match self {
            Self::SqlToDoc => "sql",
            Self::DocToSql => "mongo",
        }
    }

    /// JSON field carrying the translated query in the response body.
    pub const fn response_field(self) -> &'static str {
        match self {
            Self::SqlToDoc => "mongo_command",
            Self::DocToSql => "sql",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SqlToDoc => "SQL → MongoDB",
            Self::DocToSql => "MongoDB → SQL",
        }
    }

    /// Label used for history entries.
    pub const fn history_label(self) -> &'static str {
        match self {
            Self::SqlToDoc => "SQL to MongoDB",
            Self::DocToSql => "MongoDB to SQL",
        }
    }

    /// Short tag shown in the prompt.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::SqlToDoc => "sql",
            Self::DocToSql => "mongo",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SqlToDoc => Self::DocToSql,
            Self::DocToSql => Self::SqlToDoc,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per [`Direction`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerDirection<T> {
    sql_to_doc: T,
    doc_to_sql: T,
}

impl<T> Index<Direction> for PerDirection<T> {
    type Output = T;

    fn index(&self, direction: Direction) -> &T {
        match direction {
            Direction::SqlToDoc => &self.sql_to_doc,
            Direction::DocToSql => &self.doc_to_sql,
        }
    }
}

impl<T> IndexMut<Direction> for PerDirection<T> {
    fn index_mut(&mut self, direction: Direction) -> &mut T {
        match direction {
            Direction::SqlToDoc => &mut self.sql_to_doc,
            Direction::DocToSql => &mut self.doc_to_sql,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_direction_is_sql_to_doc() {
        assert_eq!(Direction::default(), Direction::SqlToDoc);
    }

    #[test]
    fn test_toggled_round_trips() {
        for direction in Direction::ALL {
            assert_ne!(direction.toggled(), direction);
            assert_eq!(direction.toggled().toggled(), direction);
        }
    }

    #[test]
    fn test_wire_fields() {
        assert_eq!(Direction::SqlToDoc.endpoint_path(), "translate");
        assert_eq!(Direction::SqlToDoc.request_field(), "sql");
        assert_eq!(Direction::SqlToDoc.response_field(), "mongo_command");
        assert_eq!(Direction::DocToSql.endpoint_path(), "reverse");
        assert_eq!(Direction::DocToSql.request_field(), "mongo");
        assert_eq!(Direction::DocToSql.response_field(), "sql");
    }

    #[test]
    fn test_per_direction_slots_are_independent() {
        let mut buffers: PerDirection<String> = PerDirection::default();
        buffers[Direction::SqlToDoc] = "SELECT 1".to_string();

        assert_eq!(buffers[Direction::SqlToDoc], "SELECT 1");
        assert!(buffers[Direction::DocToSql].is_empty());

        buffers[Direction::DocToSql].push_str("db.t.find({}, {})");
        assert_eq!(buffers[Direction::SqlToDoc], "SELECT 1");
    }
}

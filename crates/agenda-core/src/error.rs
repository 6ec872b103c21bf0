//! Error types for the agenda library.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::ItemKind;

/// Every failure an agenda operation or command line can report.
///
/// None of these are fatal: the shell prints them and reads the next line.
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Malformed date/time, task text, or numeric argument
    #[error("Invalid {field}: {reason}")]
    InvalidFormat { field: String, reason: String },
    /// Status argument outside `pending` / `completed`
    #[error("Invalid status '{value}': use 'completed' or 'pending'")]
    InvalidStatus { value: String },
    /// Creation would break a uniqueness rule
    #[error("{kind} already exists: {entry}")]
    DuplicateEntry { kind: ItemKind, entry: String },
    /// No item carries the requested task name
    #[error("{kind} not found: {task}")]
    NotFound { kind: ItemKind, task: String },
    /// Number-targeted operation on an empty todo list
    #[error("No todos registered")]
    EmptyCollection,
    /// Number outside the current todo range
    #[error("Invalid number {number}: choose a number between 1 and {count}")]
    OutOfRange { number: i64, count: usize },
    /// Undo requested without a held checkpoint
    #[error("Nothing to undo")]
    NothingToUndo,
    /// The document could not be written
    #[error("Failed to save data to '{path}': {source}")]
    Persistence {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The data file exists but could not be read or parsed
    #[error("Failed to load data file '{path}': {reason}")]
    MalformedDocument { path: PathBuf, reason: String },
    /// First token of a line names no known command
    #[error("Unknown command: {verb}. Type 'help' to see available commands")]
    UnknownCommand { verb: String },
    /// Sub-noun after a verb could not be resolved
    #[error("Unknown {verb} target '{target}'. Available: {choices}")]
    UnknownTarget {
        verb: &'static str,
        target: String,
        choices: &'static str,
    },
    /// Wrong number of arguments for a command
    #[error("Invalid command format. Usage: {usage}")]
    Usage { usage: &'static str },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating format validation errors.
pub struct InvalidFormatBuilder {
    field: String,
}

impl InvalidFormatBuilder {
    /// Create a new invalid format error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> AgendaError {
        AgendaError::InvalidFormat {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl AgendaError {
    /// Creates a builder for format validation errors.
    pub fn invalid_format(field: impl Into<String>) -> InvalidFormatBuilder {
        InvalidFormatBuilder::new(field)
    }

    /// Whether the error was raised before any checkpoint could be taken.
    ///
    /// Format, status and command-shape errors leave the held checkpoint
    /// untouched; lookup and persistence errors happen after it was replaced.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            AgendaError::InvalidFormat { .. }
                | AgendaError::InvalidStatus { .. }
                | AgendaError::UnknownCommand { .. }
                | AgendaError::UnknownTarget { .. }
                | AgendaError::Usage { .. }
        )
    }
}

/// Extension trait attaching a file path to `std::io` failures.
pub trait IoResultExt<T> {
    /// Map the error to [`AgendaError::FileSystem`].
    fn fs_context(self, path: &Path) -> Result<T>;

    /// Map the error to [`AgendaError::Persistence`].
    fn persist_context(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| AgendaError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }

    fn persist_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| AgendaError::Persistence {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for agenda operations
pub type Result<T> = std::result::Result<T, AgendaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_builder() {
        let err = AgendaError::invalid_format("datetime").with_reason("expected YYYY-MM-DD HH:MM");
        assert_eq!(
            err.to_string(),
            "Invalid datetime: expected YYYY-MM-DD HH:MM"
        );
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_lookup_errors_are_not_argument_errors() {
        assert!(!AgendaError::EmptyCollection.is_argument_error());
        assert!(!AgendaError::OutOfRange { number: 4, count: 3 }.is_argument_error());
        assert!(!AgendaError::NotFound {
            kind: ItemKind::Todo,
            task: "laundry".to_string(),
        }
        .is_argument_error());
    }

    #[test]
    fn test_persist_context_keeps_path() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        let err = io.persist_context(Path::new("/tmp/data.json")).unwrap_err();
        match err {
            AgendaError::Persistence { path, .. } => assert_eq!(path, Path::new("/tmp/data.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

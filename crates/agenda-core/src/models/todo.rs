//! Todo model definition.

use serde::{Deserialize, Serialize};

use super::Status;

/// A free-form task without a date.
///
/// Todos carry no stored number: their number is their current position in
/// [`super::Document::todos`] plus one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    /// Task text, may contain spaces
    pub task: String,

    /// Completion status
    #[serde(default)]
    pub status: Status,
}

impl TodoItem {
    /// Create a pending todo.
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            status: Status::Pending,
        }
    }
}

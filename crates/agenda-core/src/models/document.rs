//! The persisted document holding both collections.

use serde::{Deserialize, Serialize};

use super::{ScheduleItem, TodoItem};
use crate::error::{AgendaError, Result};

/// Everything the agenda stores, written and read as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Schedules in insertion order
    #[serde(default)]
    pub schedules: Vec<ScheduleItem>,

    /// Todos in insertion order; position defines the todo number
    #[serde(default)]
    pub todos: Vec<TodoItem>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty() && self.todos.is_empty()
    }

    /// Resolve a 1-based todo number to an index into [`Self::todos`].
    ///
    /// # Errors
    ///
    /// Returns [`AgendaError::EmptyCollection`] when there are no todos and
    /// [`AgendaError::OutOfRange`] when `number` is outside `1..=len`.
    pub fn todo_index(&self, number: i64) -> Result<usize> {
        let count = self.todos.len();
        if count == 0 {
            return Err(AgendaError::EmptyCollection);
        }
        usize::try_from(number)
            .ok()
            .filter(|n| (1..=count).contains(n))
            .map(|n| n - 1)
            .ok_or(AgendaError::OutOfRange { number, count })
    }
}

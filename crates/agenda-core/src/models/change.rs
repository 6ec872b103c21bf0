//! Values describing an applied mutation and whether it reached disk.

use super::{ScheduleTime, Status};
use crate::error::AgendaError;

/// What a successful mutation did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    ScheduleAdded {
        task: String,
        datetime: ScheduleTime,
    },
    TodoAdded {
        task: String,
    },
    ScheduleStatusChanged {
        task: String,
        from: Status,
        to: Status,
    },
    TodoStatusChanged {
        task: String,
        from: Status,
        to: Status,
    },
    /// `done <n>`; completing an already completed todo is still a change
    TodoCompleted {
        number: usize,
        task: String,
    },
    TodoDeleted {
        number: usize,
        task: String,
    },
    TodoToggled {
        number: usize,
        task: String,
        from: Status,
        to: Status,
    },
    /// The checkpoint with this label was restored
    Undone {
        label: String,
    },
}

/// Result of a mutation that passed validation and was applied in memory.
///
/// The change is reported even when saving failed; `save_error` then holds
/// the reason and memory and disk have diverged.
#[derive(Debug)]
pub struct Outcome {
    pub change: Change,
    pub save_error: Option<AgendaError>,
}

impl Outcome {
    pub fn new(change: Change, save_error: Option<AgendaError>) -> Self {
        Self { change, save_error }
    }

    /// Whether the document on disk matches memory after this change.
    pub fn is_persisted(&self) -> bool {
        self.save_error.is_none()
    }
}

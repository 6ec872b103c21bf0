//! Display implementations for domain models.
//!
//! Records format as a single line: icon, task, and status in parentheses.
//! Numbering and section headers are added by the collection wrappers in
//! [`super::collections`].

use std::fmt;

use crate::models::{ScheduleItem, Status, TodoItem};

pub const COMPLETED_ICON: &str = "✓";
pub const PENDING_ICON: &str = "○";
/// Pending schedule whose time has already passed
pub const OVERDUE_ICON: &str = "!";

impl Status {
    /// Icon for an item that is not overdue.
    pub fn icon(&self) -> &'static str {
        match self {
            Status::Completed => COMPLETED_ICON,
            Status::Pending => PENDING_ICON,
        }
    }
}

impl fmt::Display for ScheduleItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} ({})",
            self.status.icon(),
            self.task,
            self.datetime,
            self.status
        )
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.status.icon(), self.task, self.status)
    }
}

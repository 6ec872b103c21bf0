//! Display implementations for mutation results.
//!
//! Each [`Change`] renders as one confirmation line. An [`Outcome`] adds a
//! warning line when the change could not be written to disk.
//!
//! ```rust
//! use agenda_core::models::{Change, Outcome};
//!
//! let outcome = Outcome::new(Change::TodoAdded { task: "laundry".to_string() }, None);
//! assert_eq!(outcome.to_string(), "✓ Todo added: laundry\n");
//! ```

use std::fmt;

use super::models::COMPLETED_ICON;
use crate::models::{Change, Outcome};

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::ScheduleAdded { task, datetime } => {
                write!(f, "{COMPLETED_ICON} Schedule added: {task} ({datetime})")
            }
            Change::TodoAdded { task } => write!(f, "{COMPLETED_ICON} Todo added: {task}"),
            Change::ScheduleStatusChanged { task, from, to } => write!(
                f,
                "{} Schedule '{task}' status changed from '{from}' to '{to}'",
                to.icon()
            ),
            Change::TodoStatusChanged { task, from, to } => write!(
                f,
                "{} Todo '{task}' status changed from '{from}' to '{to}'",
                to.icon()
            ),
            Change::TodoToggled {
                number,
                task,
                from,
                to,
            } => write!(
                f,
                "{} Todo {number} '{task}' status changed from '{from}' to '{to}'",
                to.icon()
            ),
            Change::TodoCompleted { number, task } => {
                write!(f, "{COMPLETED_ICON} Todo {number} '{task}' marked as completed")
            }
            Change::TodoDeleted { number, task } => write!(f, "Deleted todo {number} '{task}'"),
            Change::Undone { label } => write!(f, "Undid '{label}'"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.change)?;
        if let Some(err) = &self.save_error {
            writeln!(f, "Warning: the change is kept in memory but was not saved. {err}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{error::AgendaError, models::Status};

    #[test]
    fn test_status_change_display() {
        let change = Change::TodoToggled {
            number: 2,
            task: "laundry".to_string(),
            from: Status::Completed,
            to: Status::Pending,
        };
        assert_eq!(
            change.to_string(),
            "○ Todo 2 'laundry' status changed from 'completed' to 'pending'"
        );
    }

    #[test]
    fn test_unsaved_outcome_warns() {
        let outcome = Outcome::new(
            Change::Undone {
                label: "add todo laundry".to_string(),
            },
            Some(AgendaError::Persistence {
                path: PathBuf::from("/data.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            }),
        );
        let output = outcome.to_string();
        assert!(output.starts_with("Undid 'add todo laundry'\n"));
        assert!(output.contains("Warning:"));
        assert!(output.contains("/data.json"));
    }
}

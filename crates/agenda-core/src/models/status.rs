//! Completion status shared by schedules and todos.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::AgendaError;

/// Type-safe enumeration of item statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Not done yet
    #[default]
    Pending,

    /// Done
    Completed,
}

impl FromStr for Status {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "completed" => Ok(Status::Completed),
            _ => Err(AgendaError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

impl Status {
    /// Stored and displayed representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Completed => "completed",
        }
    }

    /// The opposite status, used by toggling.
    pub fn toggled(self) -> Self {
        match self {
            Status::Pending => Status::Completed,
            Status::Completed => Status::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Status::Completed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

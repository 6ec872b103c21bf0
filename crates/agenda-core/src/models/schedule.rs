//! Schedule model definition and the canonical date/time it is pinned to.

use std::{fmt, str::FromStr};

use jiff::civil::DateTime;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::Status;
use crate::error::AgendaError;

/// strftime/strptime pattern of the canonical form.
pub const SCHEDULE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A wall-clock date and time in canonical `YYYY-MM-DD HH:MM` form.
///
/// Parsing is strict: every field is zero-padded and the value must name a
/// real calendar date and time. Because the form is fixed, the text a value
/// was parsed from is exactly the text it formats back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScheduleTime(DateTime);

impl ScheduleTime {
    pub fn datetime(&self) -> DateTime {
        self.0
    }
}

fn has_canonical_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for ScheduleTime {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AgendaError::invalid_format("datetime")
                .with_reason(format!("'{s}' is not a valid date/time, use YYYY-MM-DD HH:MM"))
        };
        if !has_canonical_shape(s) {
            return Err(invalid());
        }
        DateTime::strptime(SCHEDULE_TIME_FORMAT, s)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime(SCHEDULE_TIME_FORMAT))
    }
}

impl Serialize for ScheduleTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ScheduleTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// A task scheduled at a specific date and time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleItem {
    /// Single-token task name
    pub task: String,

    /// When the task happens
    pub datetime: ScheduleTime,

    /// Completion status
    #[serde(default)]
    pub status: Status,
}

impl ScheduleItem {
    /// Create a pending schedule.
    pub fn new(task: impl Into<String>, datetime: ScheduleTime) -> Self {
        Self {
            task: task.into(),
            datetime,
            status: Status::Pending,
        }
    }

    /// Whether this item carries the given identity pair.
    pub fn is_same_entry(&self, task: &str, datetime: &ScheduleTime) -> bool {
        self.task == task && self.datetime == *datetime
    }
}

//! Collection wrapper types for the list views.
//!
//! This module provides wrapper types that format the schedule timeline and
//! the numbered todo list with consistent structure and empty collection
//! handling.

use std::{fmt, ops::Index};

use super::{
    datetime::RelativeDay,
    models::{COMPLETED_ICON, OVERDUE_ICON, PENDING_ICON},
};
use crate::{
    agenda::RECENT_WINDOW_DAYS,
    models::{ScheduleItem, TodoItem},
};

/// A schedule placed relative to the moment the list was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub item: ScheduleItem,
    pub when: RelativeDay,
}

impl TimelineEntry {
    fn icon(&self) -> &'static str {
        match (self.item.status.is_completed(), self.when) {
            (true, _) => COMPLETED_ICON,
            (false, RelativeDay::Past(_)) => OVERDUE_ICON,
            (false, RelativeDay::Upcoming(_)) => PENDING_ICON,
        }
    }
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} ({}, {})",
            self.icon(),
            self.item.task,
            self.item.datetime,
            self.when,
            self.item.status
        )
    }
}

/// Recent schedules split around "now", each half in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleTimeline {
    /// No schedules exist at all
    Empty,
    /// Schedules exist but all fall before the recent window
    NoneRecent,
    Entries {
        past: Vec<TimelineEntry>,
        upcoming: Vec<TimelineEntry>,
    },
}

impl ScheduleTimeline {
    /// Past entries, oldest first.
    pub fn past(&self) -> &[TimelineEntry] {
        match self {
            ScheduleTimeline::Entries { past, .. } => past,
            _ => &[],
        }
    }

    /// Upcoming entries, soonest first.
    pub fn upcoming(&self) -> &[TimelineEntry] {
        match self {
            ScheduleTimeline::Entries { upcoming, .. } => upcoming,
            _ => &[],
        }
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, entries: &[TimelineEntry]) -> fmt::Result {
    writeln!(f, "## {title}")?;
    writeln!(f)?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(f, "{}. {entry}", i + 1)?;
    }
    Ok(())
}

impl fmt::Display for ScheduleTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleTimeline::Empty => writeln!(f, "No schedules registered."),
            ScheduleTimeline::NoneRecent => {
                writeln!(f, "No schedules in the last {RECENT_WINDOW_DAYS} days.")
            }
            ScheduleTimeline::Entries { past, upcoming } => {
                if !past.is_empty() {
                    write_section(f, "Past schedules", past)?;
                }
                if !past.is_empty() && !upcoming.is_empty() {
                    writeln!(f)?;
                }
                if !upcoming.is_empty() {
                    write_section(f, "Upcoming schedules", upcoming)?;
                }
                Ok(())
            }
        }
    }
}

/// Newtype wrapper for displaying the numbered todo list.
///
/// # Examples
///
/// ```rust
/// use agenda_core::{display::Todos, models::TodoItem};
///
/// let todos = Todos(vec![TodoItem::new("laundry")]);
/// assert_eq!(todos.to_string(), "## Todos\n\n1. ○ laundry (pending)\n");
/// assert_eq!(Todos(vec![]).to_string(), "No todos registered.\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todos(pub Vec<TodoItem>);

impl Todos {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of todos in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the todo carrying the given 1-based number.
    pub fn by_number(&self, number: usize) -> Option<&TodoItem> {
        number.checked_sub(1).and_then(|i| self.0.get(i))
    }

    /// Get an iterator over the todos.
    pub fn iter(&self) -> std::slice::Iter<'_, TodoItem> {
        self.0.iter()
    }
}

impl Index<usize> for Todos {
    type Output = TodoItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Todos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No todos registered.");
        }
        writeln!(f, "## Todos")?;
        writeln!(f)?;
        for (i, todo) in self.0.iter().enumerate() {
            writeln!(f, "{}. {todo}", i + 1)?;
        }
        Ok(())
    }
}

/// Schedules view followed by the todos view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub schedules: ScheduleTimeline,
    pub todos: Todos,
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.schedules)?;
        writeln!(f)?;
        write!(f, "{}", self.todos)
    }
}

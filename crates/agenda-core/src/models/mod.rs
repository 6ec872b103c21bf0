//! Data models for schedules and todos.
//!
//! This module contains the records kept in the agenda document and the
//! values produced when the document changes. Display implementations live in
//! [`crate::display`] so that the records stay plain data.
//!
//! # Records
//!
//! - [`ScheduleItem`]: a task pinned to a [`ScheduleTime`], identified by the
//!   `(task, datetime)` pair
//! - [`TodoItem`]: a free-form task, identified by its text and addressed by
//!   its current 1-based position
//! - [`Document`]: both ordered collections, persisted as one JSON document
//!
//! # Examples
//!
//! ```rust
//! use agenda_core::models::{Document, ScheduleItem, ScheduleTime, Status, TodoItem};
//!
//! let when: ScheduleTime = "2024-05-15 14:00".parse().unwrap();
//! let mut document = Document::default();
//! document.schedules.push(ScheduleItem::new("meeting", when));
//! document.todos.push(TodoItem::new("laundry"));
//!
//! assert_eq!(document.todos[0].status, Status::Pending);
//! assert_eq!(document.schedules[0].datetime.to_string(), "2024-05-15 14:00");
//! ```

use std::fmt;

pub mod change;
pub mod document;
pub mod schedule;
pub mod status;
pub mod todo;


pub use change::{Change, Outcome};
pub use document::Document;
pub use schedule::{ScheduleItem, ScheduleTime};
pub use status::Status;
pub use todo::TodoItem;

/// Which collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Schedule,
    Todo,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Schedule => write!(f, "Schedule"),
            ItemKind::Todo => write!(f, "Todo"),
        }
    }
}

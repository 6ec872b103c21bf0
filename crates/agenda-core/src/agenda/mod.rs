//! The agenda session: document, checkpoint and store in one value.
//!
//! This module provides the main [`Agenda`] interface. It owns the live
//! [`Document`], the single [`UndoSlot`] and the [`DocumentStore`] that backs
//! them, and implements every operation on top of them.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Dispatch     │    │   Operations    │    │  DocumentStore  │
//! │ (run_line,      │───▶│ (schedule_ops,  │───▶│   (JSON file)   │
//! │  execute)       │    │  todo_ops, undo)│    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: resolves the data path and loads the document
//! - [`schedule_ops`]: add a schedule, change a schedule's status
//! - [`todo_ops`]: add, complete, toggle, delete and re-status todos
//! - [`undo`]: restore the held checkpoint
//! - [`queries`]: read-only list views
//! - [`dispatch`]: route parsed commands to the operations above
//!
//! ## Mutation contract
//!
//! Every mutation runs the same sequence: validate arguments, record a
//! checkpoint, look up and mutate in memory, save the whole document. Format
//! and status errors return before the checkpoint; lookup errors return
//! after it. A failed save does not undo the in-memory change; it is carried
//! in [`Outcome::save_error`].
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use agenda_core::AgendaBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut agenda = AgendaBuilder::new()
//!     .with_data_path(Some("/tmp/agenda/data.json"))
//!     .build()?;
//!
//! agenda.add_todo("빨래하기")?;
//! agenda.done_todo_by_number(1)?;
//! println!("{}", agenda.list_todos());
//!
//! agenda.undo()?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use log::warn;

use crate::{
    checkpoint::{Checkpoint, UndoSlot},
    error::{AgendaError, Result},
    models::{Change, Document, Outcome},
    store::DocumentStore,
};

pub mod builder;
pub mod dispatch;
pub mod queries;
pub mod schedule_ops;
pub mod todo_ops;
pub mod undo;


pub use builder::AgendaBuilder;
pub use dispatch::Response;
pub use queries::RECENT_WINDOW_DAYS;

/// Main agenda interface for managing schedules and todos.
pub struct Agenda {
    pub(crate) store: DocumentStore,
    pub(crate) document: Document,
    pub(crate) undo: UndoSlot,
    load_warning: Option<AgendaError>,
}

impl Agenda {
    /// Creates an agenda over an already loaded document.
    pub(crate) fn new(
        store: DocumentStore,
        document: Document,
        load_warning: Option<AgendaError>,
    ) -> Self {
        Self {
            store,
            document,
            undo: UndoSlot::new(),
            load_warning,
        }
    }

    /// The live document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn data_path(&self) -> &Path {
        self.store.path()
    }

    /// The checkpoint the next `undo` would restore, if any.
    pub fn checkpoint(&self) -> Option<&Checkpoint> {
        self.undo.peek()
    }

    /// The error that made startup fall back to an empty document.
    ///
    /// Returns it once; later calls return `None`.
    pub fn take_load_warning(&mut self) -> Option<AgendaError> {
        self.load_warning.take()
    }

    /// Record a checkpoint of the live document before mutating it.
    pub(crate) fn checkpoint_before(&mut self, label: impl Into<String>) {
        self.undo.record(label, &self.document);
    }

    /// Persist the live document and wrap `change` with the save result.
    pub(crate) fn commit(&self, change: Change) -> Outcome {
        let save_error = self.store.save(&self.document).err();
        if let Some(err) = &save_error {
            warn!("Change kept in memory only: {err}");
        }
        Outcome::new(change, save_error)
    }
}

/// Reject blank task text.
pub(crate) fn require_task(task: &str) -> Result<&str> {
    if task.trim().is_empty() {
        return Err(AgendaError::invalid_format("task").with_reason("task must not be empty"));
    }
    Ok(task)
}

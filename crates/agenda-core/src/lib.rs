//! Core library for the agenda personal assistant.
//!
//! This crate keeps two record kinds, dated schedules and numbered todos, in
//! a single JSON document. It provides the command parser, the validated
//! mutations with their one-level undo, the whole-document store and the
//! list views.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain data, formatted by
//!   [`std::fmt::Display`] implementations in [`display::models`]
//! - **Display Wrappers** ([`display`]): list views and mutation results
//! - **Terminal Rendering**: markdown output via the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use agenda_core::{AgendaBuilder, Response};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = std::env::temp_dir().join("agenda-doc-example");
//! let mut agenda = AgendaBuilder::new()
//!     .with_data_path(Some(dir.join("data.json")))
//!     .build()?;
//!
//! // Lines are parsed exactly as the interactive shell parses them
//! if let Some(response) = agenda.run_line("add todo 빨래하기")? {
//!     print!("{response}");
//! }
//! if let Some(Response::Todos(todos)) = agenda.run_line("list todos")? {
//!     assert_eq!(todos[0].task, "빨래하기");
//! }
//! # Ok(())
//! # }
//! ```

pub mod agenda;
pub mod checkpoint;
pub mod command;
pub mod display;
pub mod error;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use agenda::{Agenda, AgendaBuilder, Response, RECENT_WINDOW_DAYS};
pub use checkpoint::{Checkpoint, UndoSlot};
pub use command::{Command, Target};
pub use display::{OperationStatus, Overview, ScheduleTimeline, Todos};
pub use error::{AgendaError, Result};
pub use models::{Change, Document, Outcome, ScheduleItem, ScheduleTime, Status, TodoItem};
pub use store::DocumentStore;

//! Display formatting for records, list views and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the list views and mutation results are wrapped in dedicated types so the
//! same data can be formatted per context. All output is light markdown that
//! the CLI renders through termimad or prints as plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Views & Results │    │   Formatted     │
//! │ (Schedule, Todo)│───▶│ (Timeline, ...) │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: list views (ScheduleTimeline, Todos, Overview)
//! - [`results`]: Display for [`crate::models::Change`] and
//!   [`crate::models::Outcome`]
//! - [`status`]: one-line verdicts (OperationStatus)
//! - [`datetime`]: relative day labels
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Overview, ScheduleTimeline, TimelineEntry, Todos};
pub use datetime::RelativeDay;
pub use status::OperationStatus;

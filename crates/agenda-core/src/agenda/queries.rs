//! Read-only list views for the Agenda.
//!
//! Queries never touch the checkpoint and never write to disk.

use jiff::{civil::DateTime, SignedDuration, Zoned};

use super::Agenda;
use crate::{
    display::{Overview, RelativeDay, ScheduleTimeline, TimelineEntry, Todos},
    models::ScheduleItem,
};

/// Schedules older than this many days are left out of listings.
pub const RECENT_WINDOW_DAYS: i64 = 30;

impl Agenda {
    /// Recent schedules relative to the current local time.
    pub fn list_schedules(&self) -> ScheduleTimeline {
        self.list_schedules_at(Zoned::now().datetime())
    }

    /// Recent schedules relative to `now`.
    pub fn list_schedules_at(&self, now: DateTime) -> ScheduleTimeline {
        schedule_timeline(&self.document.schedules, now)
    }

    /// All todos in number order.
    pub fn list_todos(&self) -> Todos {
        Todos(self.document.todos.clone())
    }

    /// Schedules view followed by the todos view.
    pub fn list_all(&self) -> Overview {
        self.list_all_at(Zoned::now().datetime())
    }

    pub fn list_all_at(&self, now: DateTime) -> Overview {
        Overview {
            schedules: self.list_schedules_at(now),
            todos: self.list_todos(),
        }
    }
}

/// Build the timeline view of `items` as seen at `now`.
///
/// Items earlier than `now` minus [`RECENT_WINDOW_DAYS`] are dropped. The
/// rest are sorted by date/time (ties keep insertion order) and split into
/// past (`< now`) and upcoming (`>= now`).
pub fn schedule_timeline(items: &[ScheduleItem], now: DateTime) -> ScheduleTimeline {
    if items.is_empty() {
        return ScheduleTimeline::Empty;
    }

    let cutoff = now.saturating_sub(SignedDuration::from_hours(24 * RECENT_WINDOW_DAYS));
    let mut recent: Vec<&ScheduleItem> = items
        .iter()
        .filter(|s| s.datetime.datetime() >= cutoff)
        .collect();
    if recent.is_empty() {
        return ScheduleTimeline::NoneRecent;
    }
    recent.sort_by_key(|s| s.datetime);

    let (past, upcoming): (Vec<&ScheduleItem>, Vec<&ScheduleItem>) = recent
        .into_iter()
        .partition(|s| s.datetime.datetime() < now);

    let past = past
        .into_iter()
        .map(|item| TimelineEntry {
            item: item.clone(),
            when: RelativeDay::Past(RelativeDay::whole_days(
                now.duration_since(item.datetime.datetime()),
            )),
        })
        .collect();
    let upcoming = upcoming
        .into_iter()
        .map(|item| TimelineEntry {
            item: item.clone(),
            when: RelativeDay::Upcoming(RelativeDay::whole_days(
                item.datetime.datetime().duration_since(now),
            )),
        })
        .collect();

    ScheduleTimeline::Entries { past, upcoming }
}

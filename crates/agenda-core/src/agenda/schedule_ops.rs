//! Schedule operations for the Agenda.

use log::info;

use super::{require_task, Agenda};
use crate::{
    error::{AgendaError, Result},
    models::{Change, ItemKind, Outcome, ScheduleItem, ScheduleTime, Status},
};

impl Agenda {
    /// Adds a pending schedule for `task` at `datetime`.
    ///
    /// `datetime` must be canonical `YYYY-MM-DD HH:MM`.
    ///
    /// # Errors
    ///
    /// - `AgendaError::InvalidFormat` for a blank task or malformed date/time;
    ///   the held checkpoint is left alone
    /// - `AgendaError::DuplicateEntry` if the same task is already scheduled
    ///   at the same time; the checkpoint has already been replaced
    pub fn add_schedule(&mut self, task: &str, datetime: &str) -> Result<Outcome> {
        let task = require_task(task)?;
        let datetime: ScheduleTime = datetime.parse()?;

        self.checkpoint_before(format!("add schedule {task} {datetime}"));

        if self
            .document
            .schedules
            .iter()
            .any(|s| s.is_same_entry(task, &datetime))
        {
            return Err(AgendaError::DuplicateEntry {
                kind: ItemKind::Schedule,
                entry: format!("{task} ({datetime})"),
            });
        }

        self.document
            .schedules
            .push(ScheduleItem::new(task, datetime));
        info!("Added schedule '{task}' at {datetime}");

        Ok(self.commit(Change::ScheduleAdded {
            task: task.to_string(),
            datetime,
        }))
    }

    /// Sets the status of the first schedule named `task`.
    ///
    /// # Errors
    ///
    /// - `AgendaError::InvalidStatus` if `status` is neither `pending` nor
    ///   `completed`; the held checkpoint is left alone
    /// - `AgendaError::NotFound` if no schedule carries that task name
    pub fn update_schedule_status(&mut self, task: &str, status: &str) -> Result<Outcome> {
        let status: Status = status.parse()?;

        self.checkpoint_before(format!("update schedule {task} {status}"));

        let item = self
            .document
            .schedules
            .iter_mut()
            .find(|s| s.task == task)
            .ok_or_else(|| AgendaError::NotFound {
                kind: ItemKind::Schedule,
                task: task.to_string(),
            })?;
        let from = std::mem::replace(&mut item.status, status);
        info!("Schedule '{task}' status {from} -> {status}");

        Ok(self.commit(Change::ScheduleStatusChanged {
            task: task.to_string(),
            from,
            to: status,
        }))
    }
}

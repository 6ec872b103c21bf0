//! Todo operations for the Agenda.
//!
//! Number-targeted operations address a todo by its current 1-based
//! position. The range check is a lookup, so it runs after the checkpoint.

use log::info;

use super::{require_task, Agenda};
use crate::{
    error::{AgendaError, Result},
    models::{Change, ItemKind, Outcome, Status, TodoItem},
};

impl Agenda {
    /// Appends a pending todo.
    ///
    /// # Errors
    ///
    /// - `AgendaError::InvalidFormat` for blank task text
    /// - `AgendaError::DuplicateEntry` if a todo with identical text exists
    pub fn add_todo(&mut self, task: &str) -> Result<Outcome> {
        let task = require_task(task)?;

        self.checkpoint_before(format!("add todo {task}"));

        if self.document.todos.iter().any(|t| t.task == task) {
            return Err(AgendaError::DuplicateEntry {
                kind: ItemKind::Todo,
                entry: task.to_string(),
            });
        }

        self.document.todos.push(TodoItem::new(task));
        info!("Added todo '{task}'");

        Ok(self.commit(Change::TodoAdded {
            task: task.to_string(),
        }))
    }

    /// Sets the status of the first todo whose text is exactly `task`.
    ///
    /// # Errors
    ///
    /// - `AgendaError::InvalidStatus` before any checkpoint is taken
    /// - `AgendaError::NotFound` if no todo matches
    pub fn update_todo_status(&mut self, task: &str, status: &str) -> Result<Outcome> {
        let status: Status = status.parse()?;

        self.checkpoint_before(format!("update todo {task} {status}"));

        let item = self
            .document
            .todos
            .iter_mut()
            .find(|t| t.task == task)
            .ok_or_else(|| AgendaError::NotFound {
                kind: ItemKind::Todo,
                task: task.to_string(),
            })?;
        let from = std::mem::replace(&mut item.status, status);
        info!("Todo '{task}' status {from} -> {status}");

        Ok(self.commit(Change::TodoStatusChanged {
            task: task.to_string(),
            from,
            to: status,
        }))
    }

    /// Marks todo `number` completed, whatever its current status.
    ///
    /// # Errors
    ///
    /// `AgendaError::EmptyCollection` or `AgendaError::OutOfRange`.
    pub fn done_todo_by_number(&mut self, number: i64) -> Result<Outcome> {
        self.checkpoint_before(self.number_label("done", number));

        let index = self.document.todo_index(number)?;
        let todo = &mut self.document.todos[index];
        todo.status = Status::Completed;
        let task = todo.task.clone();
        info!("Completed todo {number} '{task}'");

        Ok(self.commit(Change::TodoCompleted {
            number: index + 1,
            task,
        }))
    }

    /// Removes todo `number`; later todos move up by one.
    ///
    /// # Errors
    ///
    /// `AgendaError::EmptyCollection` or `AgendaError::OutOfRange`.
    pub fn delete_todo_by_number(&mut self, number: i64) -> Result<Outcome> {
        self.checkpoint_before(self.number_label("delete", number));

        let index = self.document.todo_index(number)?;
        let removed = self.document.todos.remove(index);
        info!("Deleted todo {number} '{}'", removed.task);

        Ok(self.commit(Change::TodoDeleted {
            number: index + 1,
            task: removed.task,
        }))
    }

    /// Flips todo `number` between pending and completed.
    ///
    /// # Errors
    ///
    /// `AgendaError::EmptyCollection` or `AgendaError::OutOfRange`.
    pub fn toggle_todo_by_number(&mut self, number: i64) -> Result<Outcome> {
        let label = match self.document.todo_index(number) {
            Ok(index) => {
                let todo = &self.document.todos[index];
                format!(
                    "update todo {number} ({}: {} -> {})",
                    todo.task,
                    todo.status,
                    todo.status.toggled()
                )
            }
            Err(_) => format!("update todo {number}"),
        };
        self.checkpoint_before(label);

        let index = self.document.todo_index(number)?;
        let todo = &mut self.document.todos[index];
        let from = todo.status;
        todo.status = from.toggled();
        let task = todo.task.clone();
        info!("Todo {number} '{task}' status {from} -> {}", from.toggled());

        Ok(self.commit(Change::TodoToggled {
            number: index + 1,
            task,
            from,
            to: from.toggled(),
        }))
    }

    /// Checkpoint label naming the todo a number currently points at.
    fn number_label(&self, verb: &str, number: i64) -> String {
        match self.document.todo_index(number) {
            Ok(index) => format!("{verb} {number} ({})", self.document.todos[index].task),
            Err(_) => format!("{verb} {number}"),
        }
    }
}

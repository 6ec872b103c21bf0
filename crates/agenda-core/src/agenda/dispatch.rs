//! Routing of parsed commands to agenda operations.

use std::fmt;

use log::debug;

use super::Agenda;
use crate::{
    command::{Command, Target},
    display::{Overview, ScheduleTimeline, Todos},
    error::Result,
    models::Outcome,
};

/// What running one command produced.
#[derive(Debug)]
pub enum Response {
    /// A mutation (or undo) was applied
    Changed(Outcome),
    Schedules(ScheduleTimeline),
    Todos(Todos),
    Overview(Overview),
    /// The caller should show its help screen
    Help,
    /// The caller should end the session
    Exit,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Changed(outcome) => write!(f, "{outcome}"),
            Response::Schedules(timeline) => write!(f, "{timeline}"),
            Response::Todos(todos) => write!(f, "{todos}"),
            Response::Overview(overview) => write!(f, "{overview}"),
            Response::Help | Response::Exit => Ok(()),
        }
    }
}

impl Agenda {
    /// Parse and run one input line.
    ///
    /// Returns `Ok(None)` for a blank line. Parse errors and operation errors
    /// are returned alike; neither has modified the document.
    pub fn run_line(&mut self, line: &str) -> Result<Option<Response>> {
        match Command::parse(line)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    /// Run an already parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        debug!("Executing {command:?}");
        let response = match command {
            Command::AddSchedule { task, datetime } => {
                Response::Changed(self.add_schedule(&task, &datetime)?)
            }
            Command::AddTodo { task } => Response::Changed(self.add_todo(&task)?),
            Command::UpdateScheduleStatus { task, status } => {
                Response::Changed(self.update_schedule_status(&task, &status)?)
            }
            Command::UpdateTodoStatus { task, status } => {
                Response::Changed(self.update_todo_status(&task, &status)?)
            }
            Command::ToggleTodo { number } => Response::Changed(self.toggle_todo_by_number(number)?),
            Command::DoneTodo { number } => Response::Changed(self.done_todo_by_number(number)?),
            Command::DeleteTodo { number } => {
                Response::Changed(self.delete_todo_by_number(number)?)
            }
            Command::Undo => Response::Changed(self.undo()?),
            Command::List(Target::Schedule) => Response::Schedules(self.list_schedules()),
            Command::List(Target::Todo) => Response::Todos(self.list_todos()),
            Command::List(_) => Response::Overview(self.list_all()),
            Command::Help => Response::Help,
            Command::Exit => Response::Exit,
        };
        Ok(response)
    }
}

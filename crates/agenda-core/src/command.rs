//! Parsing of typed command lines into [`Command`] values.
//!
//! A line is split on whitespace. The first token picks the verb, the second
//! (for `add`, `list` and `update`) is resolved to a [`Target`] through
//! abbreviation rules, and the remaining tokens become arguments. Verb,
//! target and status tokens are case-insensitive; task text is kept as typed.
//!
//! ```rust
//! use agenda_core::command::{Command, Target};
//!
//! let command = Command::parse("ADD to buy  milk").unwrap();
//! assert_eq!(command, Some(Command::AddTodo { task: "buy milk".to_string() }));
//!
//! let command = Command::parse("list").unwrap();
//! assert_eq!(command, Some(Command::List(Target::All)));
//! ```

use crate::error::{AgendaError, Result};

pub const ADD_USAGE: &str = "add schedule <task> <YYYY-MM-DD> <HH:MM> | add todo <task>";
pub const ADD_SCHEDULE_USAGE: &str =
    "add schedule <task> <YYYY-MM-DD> <HH:MM> (short: add s, add sc)";
pub const ADD_TODO_USAGE: &str = "add todo <task> (short: add to)";
pub const UPDATE_USAGE: &str = "update todo <number> | update todo <task> <completed|pending> | update schedule <task> <completed|pending>";
pub const UPDATE_TODO_USAGE: &str =
    "update todo <number> (toggle) or update todo <task> <completed|pending>";
pub const UPDATE_SCHEDULE_USAGE: &str = "update schedule <task> <completed|pending>";
pub const DONE_USAGE: &str = "done <number>, e.g. done 1";
pub const DELETE_USAGE: &str = "delete <number> (or del, rm), e.g. delete 1";

const ADD_CHOICES: &str = "schedule (s/sc), todo (to)";
const LIST_CHOICES: &str = "schedules (s/sc), todos (t/to), all (a)";
const UPDATE_CHOICES: &str = "schedule (s/sc), todo (t/to)";

/// The collection a verb applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Schedule,
    Todo,
    All,
    Unknown,
}

/// Verbs that take a target token, each with its own abbreviation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetVerb {
    Add,
    List,
    Update,
}

impl Target {
    /// Resolve an abbreviated target token for `verb`.
    ///
    /// Anything starting with `sc`, or exactly `s`, is a schedule. Anything
    /// starting with `to` is a todo; `list` and `update` also accept a bare
    /// `t`. Only `list` knows `all`, matched by a leading `a`.
    pub fn resolve(token: &str, verb: TargetVerb) -> Self {
        let token = token.to_lowercase();
        if token.starts_with("sc") || token == "s" {
            Target::Schedule
        } else if token.starts_with("to") || (verb != TargetVerb::Add && token == "t") {
            Target::Todo
        } else if verb == TargetVerb::List && token.starts_with('a') {
            Target::All
        } else {
            Target::Unknown
        }
    }
}

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddSchedule { task: String, datetime: String },
    AddTodo { task: String },
    /// `Target::Schedule`, `Target::Todo` or `Target::All`
    List(Target),
    UpdateScheduleStatus { task: String, status: String },
    UpdateTodoStatus { task: String, status: String },
    ToggleTodo { number: i64 },
    DoneTodo { number: i64 },
    DeleteTodo { number: i64 },
    Undo,
    Help,
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// [`AgendaError::UnknownCommand`], [`AgendaError::UnknownTarget`] and
    /// [`AgendaError::Usage`] describe malformed lines;
    /// [`AgendaError::InvalidFormat`] reports a non-numeric number argument.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = parts.first() else {
            return Ok(None);
        };

        let verb = first.to_lowercase();
        let command = match verb.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "undo" => Command::Undo,
            "add" => Self::parse_add(&parts)?,
            "list" => Self::parse_list(&parts)?,
            "update" => Self::parse_update(&parts)?,
            "done" => Command::DoneTodo {
                number: Self::number_argument(&parts, DONE_USAGE)?,
            },
            "delete" | "del" | "rm" => Command::DeleteTodo {
                number: Self::number_argument(&parts, DELETE_USAGE)?,
            },
            _ => return Err(AgendaError::UnknownCommand { verb }),
        };
        Ok(Some(command))
    }

    fn parse_add(parts: &[&str]) -> Result<Self> {
        let Some(target) = parts.get(1) else {
            return Err(AgendaError::Usage { usage: ADD_USAGE });
        };

        match Target::resolve(target, TargetVerb::Add) {
            Target::Schedule => match parts {
                [_, _, task, date, time, ..] => Ok(Command::AddSchedule {
                    task: (*task).to_string(),
                    datetime: format!("{date} {time}"),
                }),
                _ => Err(AgendaError::Usage {
                    usage: ADD_SCHEDULE_USAGE,
                }),
            },
            Target::Todo if parts.len() >= 3 => Ok(Command::AddTodo {
                task: parts[2..].join(" "),
            }),
            Target::Todo => Err(AgendaError::Usage {
                usage: ADD_TODO_USAGE,
            }),
            _ => Err(AgendaError::UnknownTarget {
                verb: "add",
                target: (*target).to_string(),
                choices: ADD_CHOICES,
            }),
        }
    }

    fn parse_list(parts: &[&str]) -> Result<Self> {
        let Some(target) = parts.get(1) else {
            return Ok(Command::List(Target::All));
        };

        match Target::resolve(target, TargetVerb::List) {
            Target::Unknown => Err(AgendaError::UnknownTarget {
                verb: "list",
                target: (*target).to_string(),
                choices: LIST_CHOICES,
            }),
            resolved => Ok(Command::List(resolved)),
        }
    }

    fn parse_update(parts: &[&str]) -> Result<Self> {
        if parts.len() < 3 {
            return Err(AgendaError::Usage {
                usage: UPDATE_USAGE,
            });
        }

        match Target::resolve(parts[1], TargetVerb::Update) {
            Target::Todo => match parts {
                [_, _, number] => Ok(Command::ToggleTodo {
                    number: parse_number(number, UPDATE_TODO_USAGE)?,
                }),
                [_, _, task, status] => Ok(Command::UpdateTodoStatus {
                    task: (*task).to_string(),
                    status: status.to_lowercase(),
                }),
                _ => Err(AgendaError::Usage {
                    usage: UPDATE_TODO_USAGE,
                }),
            },
            Target::Schedule => match parts {
                [_, _, task, status, ..] => Ok(Command::UpdateScheduleStatus {
                    task: (*task).to_string(),
                    status: status.to_lowercase(),
                }),
                _ => Err(AgendaError::Usage {
                    usage: UPDATE_SCHEDULE_USAGE,
                }),
            },
            _ => Err(AgendaError::UnknownTarget {
                verb: "update",
                target: parts[1].to_string(),
                choices: UPDATE_CHOICES,
            }),
        }
    }

    fn number_argument(parts: &[&str], usage: &'static str) -> Result<i64> {
        match parts.get(1) {
            Some(token) => parse_number(token, usage),
            None => Err(AgendaError::Usage { usage }),
        }
    }
}

/// Parse a todo number. Integers too large for `i64` saturate so the range
/// check, not the parser, rejects them.
fn parse_number(token: &str, usage: &'static str) -> Result<i64> {
    if let Ok(number) = token.parse() {
        return Ok(number);
    }
    let digits = token.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(token);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(if token.starts_with('-') { i64::MIN } else { i64::MAX });
    }
    Err(AgendaError::invalid_format("number")
        .with_reason(format!("'{token}' is not a number. Usage: {usage}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line)
            .expect("line should parse")
            .expect("line should not be blank")
    }

    #[test]
    fn test_blank_line_is_none() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t ").unwrap(), None);
    }

    #[test]
    fn test_target_resolution_per_verb() {
        use Target::*;
        use TargetVerb::*;

        assert_eq!(Target::resolve("schedule", Add), Schedule);
        assert_eq!(Target::resolve("sc", Add), Schedule);
        assert_eq!(Target::resolve("s", Add), Schedule);
        assert_eq!(Target::resolve("SCHED", Update), Schedule);
        assert_eq!(Target::resolve("sa", List), Unknown);
        assert_eq!(Target::resolve("todo", Add), Todo);
        assert_eq!(Target::resolve("to", Add), Todo);
        assert_eq!(Target::resolve("t", Add), Unknown);
        assert_eq!(Target::resolve("t", List), Todo);
        assert_eq!(Target::resolve("t", Update), Todo);
        assert_eq!(Target::resolve("all", List), All);
        assert_eq!(Target::resolve("a", List), All);
        assert_eq!(Target::resolve("all", Update), Unknown);
        assert_eq!(Target::resolve("x", List), Unknown);
    }

    #[test]
    fn test_parse_add_schedule() {
        assert_eq!(
            parse("add s 회의 2024-05-15 14:00"),
            Command::AddSchedule {
                task: "회의".to_string(),
                datetime: "2024-05-15 14:00".to_string(),
            }
        );
        assert_eq!(
            parse("Add Schedule Standup 2024-05-15 09:30 ignored"),
            Command::AddSchedule {
                task: "Standup".to_string(),
                datetime: "2024-05-15 09:30".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add_schedule_missing_time() {
        assert!(matches!(
            Command::parse("add schedule meeting 2024-05-15"),
            Err(AgendaError::Usage { usage: ADD_SCHEDULE_USAGE })
        ));
    }

    #[test]
    fn test_parse_add_todo_joins_words() {
        assert_eq!(
            parse("add todo  buy   oat milk "),
            Command::AddTodo {
                task: "buy oat milk".to_string()
            }
        );
        assert!(matches!(
            Command::parse("add to"),
            Err(AgendaError::Usage { usage: ADD_TODO_USAGE })
        ));
    }

    #[test]
    fn test_parse_add_unknown_target() {
        assert!(matches!(
            Command::parse("add t laundry"),
            Err(AgendaError::UnknownTarget { verb: "add", .. })
        ));
        assert!(matches!(
            Command::parse("add"),
            Err(AgendaError::Usage { usage: ADD_USAGE })
        ));
    }

    #[test]
    fn test_parse_list_targets() {
        assert_eq!(parse("list"), Command::List(Target::All));
        assert_eq!(parse("LIST a"), Command::List(Target::All));
        assert_eq!(parse("list schedules"), Command::List(Target::Schedule));
        assert_eq!(parse("list t"), Command::List(Target::Todo));
        assert!(matches!(
            Command::parse("list nothing"),
            Err(AgendaError::UnknownTarget { verb: "list", .. })
        ));
    }

    #[test]
    fn test_parse_update_todo_by_arity() {
        assert_eq!(parse("update t 2"), Command::ToggleTodo { number: 2 });
        assert_eq!(
            parse("update todo laundry COMPLETED"),
            Command::UpdateTodoStatus {
                task: "laundry".to_string(),
                status: "completed".to_string(),
            }
        );
        assert!(matches!(
            Command::parse("update todo laundry"),
            Err(AgendaError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Command::parse("update todo a b c"),
            Err(AgendaError::Usage { usage: UPDATE_TODO_USAGE })
        ));
    }

    #[test]
    fn test_parse_update_schedule() {
        assert_eq!(
            parse("update sc meeting completed"),
            Command::UpdateScheduleStatus {
                task: "meeting".to_string(),
                status: "completed".to_string(),
            }
        );
        assert!(matches!(
            Command::parse("update s meeting"),
            Err(AgendaError::Usage { usage: UPDATE_SCHEDULE_USAGE })
        ));
        assert!(matches!(
            Command::parse("update"),
            Err(AgendaError::Usage { usage: UPDATE_USAGE })
        ));
        assert!(matches!(
            Command::parse("update all 1"),
            Err(AgendaError::UnknownTarget { verb: "update", .. })
        ));
    }

    #[test]
    fn test_parse_number_commands() {
        assert_eq!(parse("done 1"), Command::DoneTodo { number: 1 });
        assert_eq!(parse("delete 3"), Command::DeleteTodo { number: 3 });
        assert_eq!(parse("del 2"), Command::DeleteTodo { number: 2 });
        assert_eq!(parse("RM -1"), Command::DeleteTodo { number: -1 });
        assert_eq!(
            parse("done 99999999999999999999"),
            Command::DoneTodo { number: i64::MAX }
        );
        assert_eq!(
            parse("rm -99999999999999999999"),
            Command::DeleteTodo { number: i64::MIN }
        );
        assert!(matches!(
            Command::parse("done 1-2"),
            Err(AgendaError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Command::parse("done one"),
            Err(AgendaError::InvalidFormat { .. })
        ));
        assert!(matches!(
            Command::parse("rm"),
            Err(AgendaError::Usage { usage: DELETE_USAGE })
        ));
    }

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!(parse("undo"), Command::Undo);
        assert_eq!(parse("HELP"), Command::Help);
        assert_eq!(parse("exit"), Command::Exit);
        assert!(matches!(
            Command::parse("quit"),
            Err(AgendaError::UnknownCommand { verb }) if verb == "quit"
        ));
    }
}

//! Static text shown by the interactive shell.

pub const WELCOME: &str = "\
## Agenda

Personal schedule and todo assistant. Type `help` for the command list or `exit` to quit.
";

pub const FAREWELL: &str = "Goodbye!\n";

pub const PROMPT: &str = "agenda> ";

pub const HELP: &str = "\
## Schedules

- `add schedule <task> <YYYY-MM-DD> <HH:MM>` add a schedule (short: `add s`, `add sc`)
- `update schedule <task> <completed|pending>` set a schedule's status (short: `update s`)

## Todos

- `add todo <task words...>` add a todo (short: `add to`)
- `update todo <number>` toggle a todo between pending and completed (short: `update t`)
- `update todo <task> <completed|pending>` set a todo's status by name
- `done <number>` mark a todo completed
- `delete <number>` remove a todo (also `del`, `rm`)

## Listing

- `list` or `list all` show schedules and todos (short: `list a`)
- `list schedules` show schedules from the last 30 days onward (short: `list s`)
- `list todos` show todos (short: `list t`)

## Other

- `undo` revert the last change (one level)
- `help` show this screen
- `exit` leave the shell

Use the arrow keys to walk the command history and Tab to complete commands.

## Examples

- `add s meeting 2024-05-15 14:00`
- `add to laundry`
- `done 1`
- `update t 2`
- `del 3`
- `undo`
";

/// Command phrases offered by tab completion.
pub const COMMAND_PHRASES: &[&str] = &[
    "add schedule",
    "add s",
    "add sc",
    "add todo",
    "add to",
    "list",
    "list schedules",
    "list s",
    "list sc",
    "list todos",
    "list t",
    "list to",
    "list all",
    "list a",
    "update schedule",
    "update s",
    "update sc",
    "update todo",
    "update t",
    "update to",
    "done",
    "delete",
    "del",
    "rm",
    "undo",
    "help",
    "exit",
];

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::Command;

    #[test]
    fn test_help_examples_parse() {
        for line in HELP.lines().filter(|l| l.starts_with("- `") && !l.contains('<')) {
            let example = line.trim_start_matches("- `").split('`').next().unwrap();
            assert!(
                Command::parse(example).is_ok(),
                "help example {example:?} does not parse"
            );
        }
    }
}

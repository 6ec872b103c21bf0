use std::path::PathBuf;

use clap::Parser;

/// Personal schedule and todo assistant
///
/// Without a command, starts an interactive shell that reads one command per
/// line (type `help` inside it for the command list). With a command, runs it
/// once against the same data file and exits.
#[derive(Parser)]
#[command(version, about, name = "agenda")]
pub struct Args {
    /// Path to the JSON data file. Defaults to
    /// $XDG_DATA_HOME/agenda/data.json
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Path to the interactive command history. Defaults to
    /// $XDG_DATA_HOME/agenda/history.txt
    #[arg(long)]
    pub history_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,

    /// A single command to run instead of starting the shell, e.g.
    /// `agenda add todo laundry`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Args {
    /// The one-shot command as a single line, if any words were given.
    pub fn command_line(&self) -> Option<String> {
        (!self.command.is_empty()).then(|| self.command.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_starts_shell() {
        let args = Args::parse_from(["agenda", "--no-color"]);
        assert!(args.no_color);
        assert_eq!(args.command_line(), None);
    }

    #[test]
    fn test_trailing_words_form_one_line() {
        let args = Args::parse_from([
            "agenda",
            "--data-file",
            "/tmp/data.json",
            "add",
            "todo",
            "buy",
            "milk",
        ]);
        assert_eq!(args.data_file, Some(PathBuf::from("/tmp/data.json")));
        assert_eq!(args.command_line().as_deref(), Some("add todo buy milk"));
    }

    #[test]
    fn test_negative_number_is_a_command_word() {
        let args = Args::parse_from(["agenda", "rm", "-1"]);
        assert_eq!(args.command_line().as_deref(), Some("rm -1"));
    }
}

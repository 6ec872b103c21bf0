//! Line editing with persistent history and command completion.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use log::{debug, warn};
use rustyline::{
    completion::Completer, error::ReadlineError, highlight::Highlighter, hint::Hinter,
    history::DefaultHistory, validate::Validator, Config, Context, Editor, Helper,
};

use crate::help::COMMAND_PHRASES;

/// Maximum number of remembered input lines.
pub const HISTORY_LIMIT: usize = 1000;

/// Offers every command phrase that starts with the text left of the cursor.
pub struct CommandCompleter;

impl CommandCompleter {
    fn candidates(prefix: &str) -> Vec<String> {
        COMMAND_PHRASES
            .iter()
            .filter(|phrase| phrase.starts_with(prefix))
            .map(|phrase| (*phrase).to_string())
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        Ok((0, Self::candidates(&line[..pos])))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}

/// One read from the terminal.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// End of input or interrupt
    Closed,
}

/// Interactive line reader backed by a history file.
pub struct LineEditor {
    editor: Editor<CommandCompleter, DefaultHistory>,
    history_path: PathBuf,
}

impl LineEditor {
    /// Create an editor and load the history file if it exists.
    pub fn new(history_path: PathBuf) -> Result<Self> {
        let config = Config::builder()
            .max_history_size(HISTORY_LIMIT)
            .context("Invalid history size")?
            .auto_add_history(true)
            .build();
        let mut editor: Editor<CommandCompleter, DefaultHistory> =
            Editor::with_config(config).context("Failed to initialize line editor")?;
        editor.set_helper(Some(CommandCompleter));

        if history_path.exists() {
            match editor.load_history(&history_path) {
                Ok(()) => debug!("Loaded history from {}", history_path.display()),
                Err(err) => warn!("Ignoring history file {}: {err}", history_path.display()),
            }
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Read one line, treating Ctrl-C and Ctrl-D as the end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Input::Line(line)),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(Input::Closed),
            Err(err) => Err(err).context("Failed to read input"),
        }
    }

    /// Write the history file. Failures are logged and otherwise ignored.
    pub fn save_history(&mut self) {
        if let Some(parent) = self.history_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!("Cannot create history directory {}: {err}", parent.display());
                return;
            }
        }
        match self.editor.save_history(&self.history_path) {
            Ok(()) => debug!("Saved history to {}", self.history_path.display()),
            Err(err) => warn!("Failed to save history {}: {err}", self.history_path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_matches_prefix() {
        assert_eq!(
            CommandCompleter::candidates("list t"),
            vec!["list todos", "list t", "list to"]
        );
        assert_eq!(
            CommandCompleter::candidates("d"),
            vec!["done", "delete", "del"]
        );
        assert!(CommandCompleter::candidates("x").is_empty());
        assert_eq!(CommandCompleter::candidates("").len(), COMMAND_PHRASES.len());
    }
}

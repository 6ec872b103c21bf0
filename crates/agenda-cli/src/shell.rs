//! Interactive session loop and one-shot command execution.

use agenda_core::{Agenda, OperationStatus, Response};
use anyhow::Result;
use log::{debug, info};

use crate::{
    editor::{Input, LineEditor},
    help::{FAREWELL, HELP, PROMPT, WELCOME},
    renderer::TerminalRenderer,
};

/// Whether the session should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    agenda: Agenda,
    renderer: TerminalRenderer,
}

impl Shell {
    pub fn new(agenda: Agenda, renderer: TerminalRenderer) -> Self {
        Self { agenda, renderer }
    }

    /// Print the startup load failure, if the data file could not be used.
    pub fn report_load_warning(&mut self) {
        if let Some(err) = self.agenda.take_load_warning() {
            self.renderer.render_status(&OperationStatus::failure(format!(
                "{err}. Starting with an empty agenda"
            )));
        }
    }

    /// Parse and run one line, printing its result or error.
    ///
    /// Only `exit` yields [`Flow::Exit`]; a failed command never ends the
    /// session.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        match self.agenda.run_line(line) {
            Ok(None) => Flow::Continue,
            Ok(Some(Response::Exit)) => Flow::Exit,
            Ok(Some(Response::Help)) => {
                self.renderer.render(HELP);
                Flow::Continue
            }
            Ok(Some(response)) => {
                self.renderer.render(&response.to_string());
                Flow::Continue
            }
            Err(err) => {
                let checkpoint = if err.is_argument_error() { "kept" } else { "replaced" };
                debug!("Command '{line}' failed, checkpoint {checkpoint}: {err}");
                self.renderer.render_status(&OperationStatus::from(&err));
                Flow::Continue
            }
        }
    }

    /// Run the read-execute loop until `exit`, end of input or interrupt.
    ///
    /// History is saved and the farewell printed on every one of those paths.
    pub fn run(&mut self, editor: &mut LineEditor) -> Result<()> {
        self.renderer.render(WELCOME);
        self.report_load_warning();

        let result = loop {
            match editor.read_line(PROMPT) {
                Ok(Input::Line(line)) => {
                    if self.execute_line(&line) == Flow::Exit {
                        break Ok(());
                    }
                }
                Ok(Input::Closed) => break Ok(()),
                Err(err) => break Err(err),
            }
        };

        editor.save_history();
        self.renderer.render(FAREWELL);
        info!("Session ended");
        result
    }

    #[cfg(test)]
    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::AgendaBuilder;
    use tempfile::TempDir;

    fn create_test_shell() -> (TempDir, Shell) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let agenda = AgendaBuilder::new()
            .with_data_path(Some(temp_dir.path().join("data.json")))
            .build()
            .expect("Failed to create agenda");
        (temp_dir, Shell::new(agenda, TerminalRenderer::new(false)))
    }

    #[test]
    fn test_exit_ends_session() {
        let (_temp_dir, mut shell) = create_test_shell();
        assert_eq!(shell.execute_line("exit"), Flow::Exit);
        assert_eq!(shell.execute_line("EXIT now"), Flow::Exit);
    }

    #[test]
    fn test_errors_keep_session_alive() {
        let (_temp_dir, mut shell) = create_test_shell();
        assert_eq!(shell.execute_line("bogus"), Flow::Continue);
        assert_eq!(shell.execute_line("done 1"), Flow::Continue);
        assert_eq!(shell.execute_line(""), Flow::Continue);
        assert_eq!(shell.execute_line("help"), Flow::Continue);
    }

    #[test]
    fn test_lines_reach_the_agenda() {
        let (_temp_dir, mut shell) = create_test_shell();
        shell.execute_line("add to laundry");
        shell.execute_line("done 1");
        let todos = &shell.agenda().document().todos;
        assert_eq!(todos.len(), 1);
        assert!(todos[0].status.is_completed());
    }
}

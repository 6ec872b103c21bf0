//! Agenda CLI Application
//!
//! Interactive shell and one-shot runner for the agenda assistant.

mod args;
mod editor;
mod help;
mod renderer;
mod shell;

use agenda_core::AgendaBuilder;
use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use editor::LineEditor;
use log::info;
use renderer::TerminalRenderer;
use shell::Shell;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let command_line = args.command_line();
    let Args {
        data_file,
        history_file,
        no_color,
        ..
    } = args;

    let agenda = AgendaBuilder::new()
        .with_data_path(data_file)
        .build()
        .context("Failed to initialize agenda")?;

    info!("Agenda started with data file {}", agenda.data_path().display());

    let mut shell = Shell::new(agenda, TerminalRenderer::new(!no_color));

    match command_line {
        Some(line) => {
            shell.report_load_warning();
            shell.execute_line(&line);
            Ok(())
        }
        None => {
            let history_path = match history_file {
                Some(path) => path,
                None => AgendaBuilder::default_history_path()
                    .context("Failed to resolve history file")?,
            };
            let mut editor = LineEditor::new(history_path)?;
            shell.run(&mut editor)
        }
    }
}

use std::path::{Path, PathBuf};

use agenda_core::{Agenda, AgendaBuilder};
use tempfile::TempDir;

/// Helper function to create a test agenda and its data file path
///
/// # Panics
///
/// Panics if the temporary directory or the agenda cannot be created.
pub fn create_test_agenda() -> (TempDir, PathBuf, Agenda) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_path = temp_dir.path().join("data.json");
    let agenda = reopen(&data_path);
    (temp_dir, data_path, agenda)
}

/// Opens a fresh agenda over an existing data path
///
/// # Panics
///
/// Panics if the agenda cannot be built.
pub fn reopen(data_path: &Path) -> Agenda {
    AgendaBuilder::new()
        .with_data_path(Some(data_path))
        .build()
        .expect("Failed to create agenda")
}

//! Builder for creating and configuring Agenda instances.

use std::path::{Path, PathBuf};

use log::{info, warn};

use super::Agenda;
use crate::{
    error::{AgendaError, IoResultExt, Result},
    models::Document,
    store::DocumentStore,
};

const APP_PREFIX: &str = "agenda";
const DATA_FILE_NAME: &str = "data.json";
const HISTORY_FILE_NAME: &str = "history.txt";

/// Builder for creating and configuring Agenda instances.
#[derive(Debug, Clone, Default)]
pub struct AgendaBuilder {
    data_path: Option<PathBuf>,
}

impl AgendaBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { data_path: None }
    }

    /// Sets a custom data file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/agenda/data.json` or `~/.local/share/agenda/data.json`
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured agenda and loads its document.
    ///
    /// A data file that exists but cannot be parsed does not fail the build:
    /// the agenda starts empty and the error is kept for
    /// [`Agenda::take_load_warning`].
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::XdgDirectory` if the default path cannot be
    /// resolved and `AgendaError::FileSystem` if its directory cannot be
    /// created.
    pub fn build(self) -> Result<Agenda> {
        let data_path = match self.data_path {
            Some(path) => path,
            None => Self::default_data_path()?,
        };

        if let Some(parent) = data_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).fs_context(parent)?;
        }

        let store = DocumentStore::new(&data_path);
        let (document, load_warning) = match store.load() {
            Ok(document) => (document, None),
            Err(err @ AgendaError::MalformedDocument { .. }) => {
                warn!("{err}; starting with an empty document");
                (Document::default(), Some(err))
            }
            Err(err) => return Err(err),
        };

        info!("Agenda opened at {}", data_path.display());
        Ok(Agenda::new(store, document, load_warning))
    }

    /// Returns the default data file path following XDG Base Directory
    /// specification.
    pub fn default_data_path() -> Result<PathBuf> {
        Self::place_data_file(DATA_FILE_NAME)
    }

    /// Returns the default command history path next to the data file.
    pub fn default_history_path() -> Result<PathBuf> {
        Self::place_data_file(HISTORY_FILE_NAME)
    }

    fn place_data_file(name: &str) -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX)
            .place_data_file(name)
            .map_err(|e| AgendaError::XdgDirectory(e.to_string()))
    }
}

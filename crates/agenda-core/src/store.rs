//! JSON file persistence for the agenda document.
//!
//! The document is always read and written as a whole. Writes go to a
//! sibling temporary file that is renamed over the data file, so a failed
//! save leaves the previous contents in place.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{AgendaError, IoResultExt, Result},
    models::Document,
};

/// Whole-document reader/writer bound to one file path.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document.
    ///
    /// A missing file yields an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`AgendaError::MalformedDocument`] if the file exists but
    /// cannot be read or is not a valid agenda document.
    pub fn load(&self) -> Result<Document> {
        if !self.path.exists() {
            debug!("No data file at {}, starting empty", self.path.display());
            return Ok(Document::default());
        }

        let malformed = |reason: String| AgendaError::MalformedDocument {
            path: self.path.clone(),
            reason,
        };
        let text = fs::read_to_string(&self.path).map_err(|e| malformed(e.to_string()))?;
        let document: Document = serde_json::from_str(&text).map_err(|e| malformed(e.to_string()))?;

        debug!(
            "Loaded {} schedules and {} todos from {}",
            document.schedules.len(),
            document.todos.len(),
            self.path.display()
        );
        Ok(document)
    }

    /// Overwrites the data file with `document`.
    ///
    /// # Errors
    ///
    /// Returns [`AgendaError::Persistence`] if the file could not be
    /// replaced. The previous file contents are left untouched.
    pub fn save(&self, document: &Document) -> Result<()> {
        let mut json = serde_json::to_string_pretty(document)?;
        json.push('\n');

        let temp_path = self.temp_path();
        let written = Self::write_file(&temp_path, json.as_bytes())
            .and_then(|()| fs::rename(&temp_path, &self.path));
        if written.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        written.persist_context(&self.path)?;

        debug!("Saved document to {}", self.path.display());
        Ok(())
    }

    fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

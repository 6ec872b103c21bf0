//! One-level undo for the Agenda.

use log::info;

use super::Agenda;
use crate::{
    checkpoint::Checkpoint,
    error::{AgendaError, Result},
    models::{Change, Outcome},
};

impl Agenda {
    /// Restores the document captured before the last validated mutation.
    ///
    /// The checkpoint is consumed whether or not the restored document can
    /// be saved, so a second undo in a row always fails. A failed save is
    /// reported through [`Outcome::save_error`].
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::NothingToUndo` if no checkpoint is held.
    pub fn undo(&mut self) -> Result<Outcome> {
        let Checkpoint { label, document } = self.undo.take().ok_or(AgendaError::NothingToUndo)?;

        self.document = document;
        info!("Restored checkpoint '{label}'");

        Ok(self.commit(Change::Undone { label }))
    }
}

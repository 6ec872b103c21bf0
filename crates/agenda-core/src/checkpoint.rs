//! Single-slot checkpoint backing the one-level undo.

use log::debug;

use crate::models::Document;

/// A deep copy of the document taken right before a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    /// The command that was about to run, e.g. `add todo laundry`
    pub label: String,
    pub document: Document,
}

/// Holds at most one [`Checkpoint`].
///
/// Recording a new checkpoint always discards the previous one, and taking
/// it empties the slot.
#[derive(Debug, Default)]
pub struct UndoSlot {
    held: Option<Checkpoint>,
}

impl UndoSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `document` under `label`, replacing any held checkpoint.
    pub fn record(&mut self, label: impl Into<String>, document: &Document) {
        let label = label.into();
        debug!("Checkpoint taken before '{label}'");
        self.held = Some(Checkpoint {
            label,
            document: document.clone(),
        });
    }

    /// Remove and return the held checkpoint.
    pub fn take(&mut self) -> Option<Checkpoint> {
        self.held.take()
    }

    pub fn peek(&self) -> Option<&Checkpoint> {
        self.held.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoItem;

    #[test]
    fn test_record_replaces_previous_checkpoint() {
        let mut slot = UndoSlot::new();
        slot.record("add todo a", &Document::default());
        slot.record("add todo b", &Document::default());

        assert_eq!(slot.peek().map(|c| c.label.as_str()), Some("add todo b"));
        assert!(slot.take().is_some());
        assert!(slot.is_empty());
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_checkpoint_is_independent_of_live_document() {
        let mut slot = UndoSlot::new();
        let mut live = Document::default();
        live.todos.push(TodoItem::new("first"));
        slot.record("add todo second", &live);

        live.todos.push(TodoItem::new("second"));
        live.todos[0].task = "renamed".to_string();

        let held = slot.take().unwrap();
        assert_eq!(held.document.todos, vec![TodoItem::new("first")]);
    }
}

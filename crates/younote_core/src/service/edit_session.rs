//! Single-note editing flow.
//!
//! # Responsibility
//! - Hold the draft body while a note is being edited.
//! - Turn the commit key into an explicit [`EditCommit`] value that the
//!   list flow applies, instead of calling back into it.
//!
//! # Invariants
//! - The commit key itself is never inserted into the draft.
//! - The session never touches storage; only the applied commit does.

use crate::model::note::{Note, NoteId};

/// Replacement text that ends editing (the keyboard "done" key).
pub const COMMIT_KEY: &str = "\n";

/// Body produced by a finished edit, addressed by note id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommit {
    pub note_id: NoteId,
    pub body: String,
}

/// Result of feeding one replacement into an [`EditSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Text was applied; keep editing.
    Continue,
    /// Commit key pressed; apply this to the store.
    Commit(EditCommit),
}

/// Draft state for one note being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    note_id: NoteId,
    text: String,
}

impl EditSession {
    /// Starts editing `note`, pre-filled with its current body.
    pub fn new(note: &Note) -> Self {
        Self {
            note_id: note.id,
            text: note.body.clone(),
        }
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    /// Current draft text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the whole draft, e.g. after a paste or a cursor-based edit.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Applies typed text at the end of the draft.
    ///
    /// [`COMMIT_KEY`] is swallowed and produces [`EditOutcome::Commit`] with
    /// the draft as it stands.
    pub fn insert(&mut self, replacement: &str) -> EditOutcome {
        if replacement == COMMIT_KEY {
            return EditOutcome::Commit(self.commit());
        }
        self.text.push_str(replacement);
        EditOutcome::Continue
    }

    /// Ends the session without going through the commit key.
    pub fn finish(self) -> EditCommit {
        EditCommit {
            note_id: self.note_id,
            body: self.text,
        }
    }

    fn commit(&self) -> EditCommit {
        EditCommit {
            note_id: self.note_id,
            body: self.text.clone(),
        }
    }
}

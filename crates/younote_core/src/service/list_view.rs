//! In-memory note list backing the list screen.
//!
//! # Responsibility
//! - Hold the rows currently shown and the active search filter.
//! - Route add/edit/delete through the store and reload afterwards.
//!
//! # Invariants
//! - Rows are only ever replaced by a fresh read from the store, so they
//!   equal persisted state after every successful call.
//! - A failed reload keeps the previous rows.
//! - Once a write commits, the call succeeds even if the reload after it
//!   fails; callers can check [`NoteListView::is_stale`].
//! - Row indexes are resolved to note ids before any mutation.

use crate::model::note::{Note, NoteId};
use crate::search::filter::NameFilter;
use crate::service::edit_session::{EditCommit, EditSession};
use crate::service::note_store::{NoteStore, StoreResult};
use log::warn;

/// List screen state over a borrowed [`NoteStore`].
pub struct NoteListView<'store> {
    store: &'store NoteStore,
    items: Vec<Note>,
    filter: Option<NameFilter>,
    stale: bool,
}

impl<'store> NoteListView<'store> {
    /// Creates an empty view; call [`load`](Self::load) to populate it.
    pub fn new(store: &'store NoteStore) -> Self {
        Self {
            store,
            items: Vec::new(),
            filter: None,
            stale: false,
        }
    }

    /// Rows in display order.
    pub fn items(&self) -> &[Note] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Active search text, if any.
    pub fn search_text(&self) -> Option<&str> {
        self.filter.as_ref().map(NameFilter::text)
    }

    /// Reloads rows from the store under the current filter.
    ///
    /// On failure the previous rows stay in place and the error is returned.
    pub fn load(&mut self) -> StoreResult<&[Note]> {
        match self.store.list_with(self.filter.clone(), None) {
            Ok(notes) => {
                self.items = notes;
                self.stale = false;
                Ok(&self.items)
            }
            Err(err) => {
                self.stale = true;
                warn!(
                    "event=view_reload module=view status=error kept_rows={} error={}",
                    self.items.len(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Applies search text and reloads. Empty text clears the search.
    pub fn search(&mut self, text: &str) -> StoreResult<&[Note]> {
        self.filter = NameFilter::parse(text);
        self.load()
    }

    /// Drops the search filter and reloads the full list.
    pub fn clear_search(&mut self) -> StoreResult<&[Note]> {
        self.filter = None;
        self.load()
    }

    /// Creates a note and reloads.
    ///
    /// A failed reload after the insert commits is not reported as an
    /// error; the created note is returned and the view is marked stale.
    pub fn add(&mut self, name: impl Into<String>) -> StoreResult<Note> {
        let note = self.store.create(name)?;
        self.reload_after_write();
        Ok(note)
    }

    /// Opens an editor on the row at `index`.
    pub fn edit_at(&self, index: usize) -> Option<EditSession> {
        self.items.get(index).map(EditSession::new)
    }

    /// Writes a finished edit to the store and reloads.
    pub fn apply(&mut self, commit: EditCommit) -> StoreResult<Note> {
        let note = self.store.update(commit.note_id, commit.body)?;
        self.reload_after_write();
        Ok(note)
    }

    /// Deletes the note shown at `index` and reloads.
    ///
    /// Returns the id that was deleted, or `None` for an out-of-range index.
    pub fn delete_at(&mut self, index: usize) -> StoreResult<Option<NoteId>> {
        let Some(note_id) = self.items.get(index).map(|note| note.id) else {
            return Ok(None);
        };
        self.delete(note_id)?;
        Ok(Some(note_id))
    }

    /// Deletes a note by id and reloads. Unknown ids are a no-op.
    pub fn delete(&mut self, note_id: NoteId) -> StoreResult<bool> {
        let removed = self.store.delete(note_id)?;
        self.reload_after_write();
        Ok(removed)
    }

    /// Returns whether the last reload failed, leaving rows that may no
    /// longer match storage.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    fn reload_after_write(&mut self) {
        // load() already logged the failure and kept the previous rows.
        let _ = self.load();
    }
}

//! Durable note store.
//!
//! # Responsibility
//! - Own the single SQLite connection holding all notes.
//! - Expose create/list/get/update/rename/delete with typed errors.
//!
//! # Invariants
//! - Every mutation is committed before the call returns.
//! - Writes return the record read back from storage, never the caller's
//!   in-memory copy.
//! - Deleting an unknown id is a no-op.
//! - Logs carry ids and counts only; names and bodies are never logged.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::note::{validate_name, Note, NoteId, NoteValidationError};
use crate::repo::note_repo::{NoteListQuery, NoteRepository, RepoError, SqliteNoteRepository};
use crate::search::filter::{NameFilter, SortKey};
use log::{debug, error, info, warn};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type StoreResult<T> = Result<T, NoteStoreError>;

/// Error surfaced by [`NoteStore`] operations.
#[derive(Debug)]
pub enum NoteStoreError {
    /// Storage could not be opened or migrated.
    Open(DbError),
    /// Name rejected by strict validation.
    Validation(NoteValidationError),
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// A create/update/rename/delete failed to commit.
    Persistence {
        operation: &'static str,
        source: RepoError,
    },
    /// A list/get query failed.
    Load(RepoError),
    /// Write succeeded but read-back disagrees.
    InconsistentState(&'static str),
    /// Connection could not be closed cleanly.
    Close(DbError),
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(err) => write!(f, "failed to open note store: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Persistence { operation, source } => {
                write!(f, "failed to persist {operation}: {source}")
            }
            Self::Load(err) => write!(f, "failed to load notes: {err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
            Self::Close(err) => write!(f, "failed to close note store: {err}"),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open(err) | Self::Close(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::Persistence { source, .. } => Some(source),
            Self::Load(err) => Some(err),
            Self::NoteNotFound(_) | Self::InconsistentState(_) => None,
        }
    }
}

impl From<NoteValidationError> for NoteStoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl NoteStoreError {
    fn persistence(operation: &'static str, err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            source => Self::Persistence { operation, source },
        }
    }
}

/// Behavior switches fixed at open time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Reject blank names on create and rename.
    ///
    /// Off by default: any string, including the empty one, is accepted.
    pub reject_empty_names: bool,
}

/// The durable, searchable collection of notes.
///
/// One instance per process, opened at startup and passed to whoever needs
/// it. All operations take `&self`; the connection is not shared with other
/// threads.
pub struct NoteStore {
    conn: Connection,
    options: StoreOptions,
}

impl NoteStore {
    /// Opens (or creates) the store at `path`.
    pub fn open(path: impl AsRef<Path>, options: StoreOptions) -> StoreResult<Self> {
        let conn = open_db(path).map_err(NoteStoreError::Open)?;
        Ok(Self { conn, options })
    }

    /// Opens a store that lives only as long as the returned value.
    pub fn open_in_memory(options: StoreOptions) -> StoreResult<Self> {
        let conn = open_db_in_memory().map_err(NoteStoreError::Open)?;
        Ok(Self { conn, options })
    }

    /// Options this store was opened with.
    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Closes the underlying connection, reporting any pending failure.
    pub fn close(self) -> StoreResult<()> {
        self.conn
            .close()
            .map_err(|(_, err)| NoteStoreError::Close(DbError::Sqlite(err)))?;
        info!("event=store_close module=store status=ok");
        Ok(())
    }

    /// Creates a note with the given name and an empty body.
    ///
    /// Duplicate names are allowed.
    pub fn create(&self, name: impl Into<String>) -> StoreResult<Note> {
        let name = name.into();
        self.check_name(&name)?;

        let note = Note::new(name);
        let repo = self.repo();
        let note_id = repo
            .insert_note(&note)
            .map_err(|err| write_error("create", err))?;
        info!("event=note_create module=store status=ok note_id={note_id}");

        repo.get_note(note_id)
            .map_err(NoteStoreError::Load)?
            .ok_or(NoteStoreError::InconsistentState(
                "created note not found in read-back",
            ))
    }

    /// Lists notes.
    ///
    /// - No filter (or empty filter text): every note, insertion order.
    /// - Filter: notes whose name contains the text, ignoring case and
    ///   diacritics, sorted by name.
    ///
    /// `sort` overrides the default ordering in both cases.
    pub fn list(&self, filter: Option<&str>, sort: Option<SortKey>) -> StoreResult<Vec<Note>> {
        let filter = filter.and_then(NameFilter::parse);
        self.list_with(filter, sort)
    }

    /// Lists notes with an already parsed filter.
    pub fn list_with(
        &self,
        filter: Option<NameFilter>,
        sort: Option<SortKey>,
    ) -> StoreResult<Vec<Note>> {
        let sort = sort.unwrap_or_else(|| {
            if filter.is_some() {
                NameFilter::default_sort()
            } else {
                SortKey::Insertion
            }
        });
        let filtered = filter.is_some();
        let query = NoteListQuery { filter, sort };

        match self.repo().list_notes(&query) {
            Ok(notes) => {
                debug!(
                    "event=note_list module=store status=ok filtered={} count={}",
                    filtered,
                    notes.len()
                );
                Ok(notes)
            }
            Err(err) => {
                error!(
                    "event=note_list module=store status=error filtered={} error={}",
                    filtered, err
                );
                Err(NoteStoreError::Load(err))
            }
        }
    }

    /// Gets one note by id.
    pub fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        self.repo().get_note(id).map_err(NoteStoreError::Load)
    }

    /// Replaces the body of a note. Name and id are untouched.
    pub fn update(&self, id: NoteId, body: impl AsRef<str>) -> StoreResult<Note> {
        let repo = self.repo();
        repo.update_body(id, body.as_ref())
            .map_err(|err| write_error("update", err))?;
        info!("event=note_update module=store status=ok note_id={id}");

        repo.get_note(id)
            .map_err(NoteStoreError::Load)?
            .ok_or(NoteStoreError::InconsistentState(
                "updated note not found in read-back",
            ))
    }

    /// Replaces the name of a note. Body and id are untouched.
    pub fn rename(&self, id: NoteId, name: impl AsRef<str>) -> StoreResult<Note> {
        let name = name.as_ref();
        self.check_name(name)?;

        let repo = self.repo();
        repo.update_name(id, name)
            .map_err(|err| write_error("rename", err))?;
        info!("event=note_rename module=store status=ok note_id={id}");

        repo.get_note(id)
            .map_err(NoteStoreError::Load)?
            .ok_or(NoteStoreError::InconsistentState(
                "renamed note not found in read-back",
            ))
    }

    /// Permanently deletes a note.
    ///
    /// Returns `false` when no note had that id; that is not an error.
    pub fn delete(&self, id: NoteId) -> StoreResult<bool> {
        let removed = self
            .repo()
            .delete_note(id)
            .map_err(|err| write_error("delete", err))?;
        if removed {
            info!("event=note_delete module=store status=ok note_id={id}");
        } else {
            debug!("event=note_delete module=store status=noop note_id={id}");
        }
        Ok(removed)
    }

    fn repo(&self) -> SqliteNoteRepository<'_> {
        SqliteNoteRepository::new(&self.conn)
    }

    fn check_name(&self, name: &str) -> StoreResult<()> {
        if self.options.reject_empty_names {
            if let Err(err) = validate_name(name) {
                warn!("event=note_validate module=store status=rejected reason=empty_name");
                return Err(err.into());
            }
        }
        Ok(())
    }
}

fn write_error(operation: &'static str, err: RepoError) -> NoteStoreError {
    error!(
        "event=note_{} module=store status=error error={}",
        operation, err
    );
    NoteStoreError::persistence(operation, err)
}

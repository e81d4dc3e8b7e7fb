//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD over the `notes` table.
//! - Keep `name_key` in sync with `name` on every write.
//!
//! # Invariants
//! - Listing order is always fully determined (`seq` is the final tiebreak).
//! - Read paths reject malformed persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::note::{Note, NoteId};
use crate::search::filter::{fold_name, NameFilter, SortKey};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const NOTE_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    body,
    created_at,
    updated_at
FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListQuery {
    /// Name substring filter; `None` lists everything.
    pub filter: Option<NameFilter>,
    /// Result ordering.
    pub sort: SortKey,
}

/// Repository interface for note persistence.
pub trait NoteRepository {
    /// Inserts a new note row. `created_at`/`updated_at` are assigned by storage.
    fn insert_note(&self, note: &Note) -> RepoResult<NoteId>;
    /// Replaces the body of an existing note.
    fn update_body(&self, id: NoteId, body: &str) -> RepoResult<()>;
    /// Replaces the name of an existing note.
    fn update_name(&self, id: NoteId, name: &str) -> RepoResult<()>;
    /// Gets one note by id.
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Lists notes matching the query.
    fn list_notes(&self, query: &NoteListQuery) -> RepoResult<Vec<Note>>;
    /// Deletes a note; returns `false` when no row had that id.
    fn delete_note(&self, id: NoteId) -> RepoResult<bool>;
}

/// SQLite-backed note repository over a migrated connection.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert_note(&self, note: &Note) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (uuid, name, name_key, body)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                note.id.to_string(),
                note.name.as_str(),
                fold_name(&note.name),
                note.body.as_str(),
            ],
        )?;
        Ok(note.id)
    }

    fn update_body(&self, id: NoteId, body: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                body = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1;",
            params![id.to_string(), body],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn update_name(&self, id: NoteId, name: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                name = ?2,
                name_key = ?3,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?1;",
            params![id.to_string(), name, fold_name(name)],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }
        Ok(None)
    }

    fn list_notes(&self, query: &NoteListQuery) -> RepoResult<Vec<Note>> {
        let mut sql = String::from(NOTE_SELECT_SQL);
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(filter) = query.filter.as_ref() {
            // instr() treats an empty needle as matching every row.
            if filter.is_vacuous() {
                return Ok(Vec::new());
            }
            sql.push_str(" WHERE instr(name_key, ?) > 0");
            bind_values.push(Value::Text(filter.key().to_string()));
        }

        sql.push(' ');
        sql.push_str(query.sort.order_by_sql());

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE uuid = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in notes.uuid"))
    })?;

    Ok(Note {
        id,
        name: row.get("name")?,
        body: row.get("body")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

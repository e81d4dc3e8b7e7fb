//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the note store operations the list and edit screens need.
//! - Flatten typed core errors into message strings for the UI.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Note ids cross the boundary as canonical UUID strings.
//! - Every call opens the store at the single process-wide database path.

use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;
use younote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Note, NoteStore, StoreOptions,
};

const NOTES_DB_FILE_NAME: &str = "younote.sqlite3";
const NOTES_DB_PATH_ENV: &str = "YOUNOTE_DB_PATH";
static NOTES_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Pins the notes database file used by every later call.
///
/// Must run before the first note call; once a path is in use it cannot
/// change for the lifetime of the process.
///
/// # FFI contract
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_notes_db_path(db_path: String) -> String {
    let trimmed = db_path.trim();
    if trimmed.is_empty() {
        return "db_path cannot be empty".to_string();
    }
    let requested = PathBuf::from(trimmed);
    let active = NOTES_DB_PATH.get_or_init(|| requested.clone());
    if *active == requested {
        String::new()
    } else {
        format!(
            "notes database already configured at `{}`; refusing to switch to `{}`",
            active.display(),
            requested.display()
        )
    }
}

/// Note row returned to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Stable note ID in string form.
    pub note_id: String,
    pub name: String,
    pub body: String,
    /// Epoch milliseconds.
    pub created_at: i64,
    /// Epoch milliseconds.
    pub updated_at: i64,
}

impl From<Note> for NoteItem {
    fn from(note: Note) -> Self {
        Self {
            note_id: note.id.to_string(),
            name: note.name,
            body: note.body,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// Response envelope for note listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResponse {
    /// Whether the query succeeded. On failure `items` is empty and the UI
    /// should keep showing its previous rows.
    pub ok: bool,
    pub items: Vec<NoteItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Response envelope for single-note operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected note, when one exists after the operation.
    pub note: Option<NoteItem>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, note: Option<Note>) -> Self {
        Self {
            ok: true,
            note: note.map(NoteItem::from),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note: None,
            message: message.into(),
        }
    }
}

/// Creates a note with the given name and an empty body.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_create(name: String) -> NoteActionResponse {
    match with_store(|store| store.create(name)) {
        Ok(note) => NoteActionResponse::success("Note created.", Some(note)),
        Err(err) => NoteActionResponse::failure(format!("notes_create failed: {err}")),
    }
}

/// Lists notes, optionally filtered by name.
///
/// Empty or missing `filter` lists everything in creation order; otherwise
/// matching notes come back sorted by name.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list(filter: Option<String>) -> NotesListResponse {
    match with_store(|store| store.list(filter.as_deref(), None)) {
        Ok(notes) => {
            let items = notes.into_iter().map(NoteItem::from).collect::<Vec<_>>();
            let message = if items.is_empty() {
                "No notes.".to_string()
            } else {
                format!("Found {} note(s).", items.len())
            };
            NotesListResponse {
                ok: true,
                items,
                message,
            }
        }
        Err(err) => NotesListResponse {
            ok: false,
            items: Vec::new(),
            message: format!("notes_list failed: {err}"),
        },
    }
}

/// Gets one note by ID.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_get(note_id: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };
    match with_store(|store| store.get(id)) {
        Ok(Some(note)) => NoteActionResponse::success("Note loaded.", Some(note)),
        Ok(None) => NoteActionResponse::failure(format!("note not found: {id}")),
        Err(err) => NoteActionResponse::failure(format!("notes_get failed: {err}")),
    }
}

/// Replaces the body of a note when the editor commits.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_update(note_id: String, body: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };
    match with_store(|store| store.update(id, body)) {
        Ok(note) => NoteActionResponse::success("Note saved.", Some(note)),
        Err(err) => NoteActionResponse::failure(format!("notes_update failed: {err}")),
    }
}

/// Replaces the name of a note.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_rename(note_id: String, name: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };
    match with_store(|store| store.rename(id, name)) {
        Ok(note) => NoteActionResponse::success("Note renamed.", Some(note)),
        Err(err) => NoteActionResponse::failure(format!("notes_rename failed: {err}")),
    }
}

/// Deletes a note by ID. Deleting an unknown ID succeeds as a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete(note_id: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };
    match with_store(|store| store.delete(id)) {
        Ok(true) => NoteActionResponse::success("Note deleted.", None),
        Ok(false) => NoteActionResponse::success("Note already gone.", None),
        Err(err) => NoteActionResponse::failure(format!("notes_delete failed: {err}")),
    }
}

fn parse_note_id(raw: &str) -> Result<Uuid, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid note id `{raw}`"))
}

fn resolve_notes_db_path() -> PathBuf {
    NOTES_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(NOTES_DB_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(NOTES_DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(
    f: impl FnOnce(&NoteStore) -> younote_core::StoreResult<T>,
) -> Result<T, String> {
    let db_path = resolve_notes_db_path();
    let store = NoteStore::open(&db_path, StoreOptions::default())
        .map_err(|err| format!("notes DB open failed: {err}"))?;
    let result = f(&store).map_err(|err| err.to_string());
    if let Err(err) = store.close() {
        warn!("event=ffi_store_close module=ffi status=error error={err}");
    }
    result
}

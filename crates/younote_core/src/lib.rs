//! Core storage for YouNote.
//! This crate is the single source of truth for notes and their invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::note::{validate_name, Note, NoteId, NoteValidationError};
pub use repo::note_repo::{
    NoteListQuery, NoteRepository, RepoError, RepoResult, SqliteNoteRepository,
};
pub use search::filter::{fold_name, NameFilter, SortKey};
pub use service::edit_session::{EditCommit, EditOutcome, EditSession, COMMIT_KEY};
pub use service::list_view::NoteListView;
pub use service::note_store::{NoteStore, NoteStoreError, StoreOptions, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

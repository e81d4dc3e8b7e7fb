//! Domain model for the note store.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion removes the record; nothing is tombstoned.

pub mod note;

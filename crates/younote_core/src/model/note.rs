//! Note domain model.
//!
//! # Responsibility
//! - Define the single record persisted by the note store.
//! - Own name validation rules shared by create and rename paths.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused.
//! - `name` and `body` change independently of each other.
//! - Deletion is permanent; there is no tombstone state.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A user-created text record with a display name and a free-form body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Disambiguates notes that share the same name.
    pub id: NoteId,
    /// Short display string shown in the list.
    pub name: String,
    /// Plain text content; empty until the first edit commit.
    pub body: String,
    /// Unix epoch milliseconds, set on insert.
    pub created_at: i64,
    /// Unix epoch milliseconds, bumped by every update or rename.
    pub updated_at: i64,
}

impl Note {
    /// Creates an unsaved note with a generated id and an empty body.
    ///
    /// Timestamps stay zero until storage assigns them.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an unsaved note with a caller-provided id.
    pub fn with_id(id: NoteId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            body: String::new(),
            created_at: 0,
            updated_at: 0,
        }
    }

    /// Returns whether a non-empty body has been committed.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// Name rejected by strict validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Name is empty or only whitespace.
    EmptyName,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "note name must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// Checks a note name under strict rules.
///
/// Lenient stores skip this call entirely and accept any string.
pub fn validate_name(name: &str) -> Result<(), NoteValidationError> {
    if name.trim().is_empty() {
        return Err(NoteValidationError::EmptyName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_name, Note, NoteValidationError};

    #[test]
    fn new_note_starts_with_empty_body_and_unique_id() {
        let first = Note::new("Groceries");
        let second = Note::new("Groceries");
        assert_eq!(first.name, "Groceries");
        assert!(first.body.is_empty());
        assert!(!first.has_body());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn validate_name_rejects_blank_values() {
        assert_eq!(validate_name("   "), Err(NoteValidationError::EmptyName));
        assert_eq!(validate_name(""), Err(NoteValidationError::EmptyName));
        assert!(validate_name(" Work ").is_ok());
    }

    #[test]
    fn note_serializes_with_snake_case_fields() {
        let note = Note::new("Work Ideas");
        let value = serde_json::to_value(&note).expect("note should serialize");
        assert_eq!(value["name"], "Work Ideas");
        assert_eq!(value["body"], "");
        assert!(value.get("created_at").is_some());
    }
}

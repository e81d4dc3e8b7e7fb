//! Repository contracts and SQLite persistence for notes.
//!
//! # Responsibility
//! - Define the data access contract the note store is written against.
//! - Keep SQL details out of the store and list view.
//!
//! # Invariants
//! - Repository APIs report semantic errors (`NotFound`) separately from
//!   SQLite transport errors.

pub mod note_repo;

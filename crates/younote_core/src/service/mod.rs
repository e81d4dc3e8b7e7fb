//! Note store and the screen-facing flows built on it.
//!
//! # Responsibility
//! - `note_store`: durable CRUD + search entry point.
//! - `list_view`: list screen state, always reloaded from the store.
//! - `edit_session`: editor draft that hands back an explicit commit.

pub mod edit_session;
pub mod list_view;
pub mod note_store;

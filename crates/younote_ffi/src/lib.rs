//! Flutter-facing bindings for the YouNote core.

pub mod api;

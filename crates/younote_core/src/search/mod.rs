//! Name search used by note listing.
//!
//! # Responsibility
//! - Fold names and filter text into a comparable key.
//! - Describe list ordering independently of SQL.

pub mod filter;

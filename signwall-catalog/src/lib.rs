//! Playlist catalog data model types.
//!
//! This crate defines the persistent data model for the signage playlist
//! without any database dependencies. Consumers can use these types directly
//! for display, or pass them to `signwall-db` for persistence.

pub mod types;

pub use types::*;

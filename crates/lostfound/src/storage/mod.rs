//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `lostfound_core::storage`.

pub mod sqlite;

pub use sqlite::SqliteRepository;

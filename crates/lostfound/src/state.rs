//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds nothing mutable: storage lives behind the
//! repository trait object.

use std::sync::Arc;

use lostfound_core::storage::ItemRepository;

use crate::{config::Config, storage::SqliteRepository};

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Item repository.
    pub item_repo: Arc<dyn ItemRepository>,
}

impl AppState {
    /// Creates a new AppState around the given repository.
    pub fn new(item_repo: Arc<dyn ItemRepository>) -> Self {
        Self { item_repo }
    }

    /// Creates an AppState backed by SQLite at the configured path.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let repo = SqliteRepository::new(&config.sqlite_path).await?;
        Ok(Self::new(Arc::new(repo)))
    }
}

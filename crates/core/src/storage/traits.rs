use async_trait::async_trait;

use crate::item::{CreateItemRequest, Item};

use super::Result;

/// Repository for lost-and-found items.
///
/// Implementations acquire storage per call and release it before
/// returning; nothing is cached between calls.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Lists every item in insertion order.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Gets an item by its ID. A missing ID is `Ok(None)`, not an error.
    async fn get_item(&self, id: i64) -> Result<Option<Item>>;

    /// Validates and inserts a new item, returning its assigned ID.
    ///
    /// The stored status is always `unclaimed`. Fails with
    /// [`RepositoryError::MissingField`](super::RepositoryError::MissingField)
    /// before touching storage when a required field is absent.
    async fn create_item(&self, request: CreateItemRequest) -> Result<i64>;

    /// Finds items whose name, description or location contain `keyword`.
    async fn search_items(&self, keyword: &str) -> Result<Vec<Item>>;

    /// Checks that storage is reachable.
    async fn ping(&self) -> Result<()>;
}

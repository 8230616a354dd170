//! Item API operations.

use serde::Deserialize;

use super::LostFoundClient;
use crate::error::Result;
use lostfound_core::item::{CreateItemRequest, Item};

/// Confirmation returned when an item is created.
#[derive(Debug, serde::Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
}

impl LostFoundClient {
    /// List all items.
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let response = self.client.get(self.url("/api/items")).send().await?;
        self.handle_response(response, "Items").await
    }

    /// Register a found item.
    pub async fn create_item(&self, req: &CreateItemRequest) -> Result<CreatedResponse> {
        let response = self
            .client
            .post(self.url("/api/items"))
            .json(req)
            .send()
            .await?;
        self.handle_response(response, "Items").await
    }

    /// Get item by ID.
    pub async fn get_item(&self, id: i64) -> Result<Item> {
        let response = self
            .client
            .get(self.url(&format!("/api/items/{}", id)))
            .send()
            .await?;
        self.handle_response(response, &format!("Item {}", id))
            .await
    }

    /// Search items by keyword.
    pub async fn search_items(&self, keyword: &str) -> Result<Vec<Item>> {
        let response = self
            .client
            .get(self.url(&search_path(keyword)))
            .send()
            .await?;
        self.handle_response(response, "Items").await
    }
}

/// Path for a keyword search, with the keyword encoded as one path segment.
fn search_path(keyword: &str) -> String {
    format!("/api/items/search/{}", urlencoding::encode(keyword))
}

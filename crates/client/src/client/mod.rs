//! HTTP client for the lostfound API.

pub mod health;
pub mod items;

use crate::error::{ClientError, Result};

/// HTTP client for the lostfound API.
#[derive(Debug, Clone)]
pub struct LostFoundClient {
    client: reqwest::Client,
    base_url: String,
}

impl LostFoundClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound {
                resource: resource.to_string(),
            })
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

/// Extracts the `error` field from a JSON error body, or returns the body as-is.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

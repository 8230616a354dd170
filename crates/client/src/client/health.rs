//! Health check operations.

use super::LostFoundClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Backend status payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct BackendStatus {
    pub status: String,
}

/// Readiness probe result.
#[derive(Debug, Serialize, Deserialize)]
pub struct Readiness {
    pub healthy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LostFoundClient {
    /// Get backend status.
    pub async fn health(&self) -> Result<BackendStatus> {
        let response = self.client.get(self.url("/api/health")).send().await?;
        self.handle_response(response, "Health").await
    }

    /// Check storage readiness.
    ///
    /// A 503 still carries a readiness body, so it is decoded rather than
    /// treated as an error.
    pub async fn ready(&self) -> Result<Readiness> {
        let response = self.client.get(self.url("/readyz")).send().await?;
        if response.status() == reqwest::StatusCode::SERVICE_UNAVAILABLE {
            return Ok(response.json().await?);
        }
        self.handle_response(response, "Readiness").await
    }
}

//! Health check endpoints.
//!
//! - `/api/health` - Static status payload, never touches storage
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (active storage connectivity check)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::AppState;

/// GET /api/health - Backend status.
///
/// Always returns 200, regardless of storage state.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "backend running" }))
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Opens a storage connection and runs a trivial query.
/// Returns 200 if storage is reachable, 503 otherwise.
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.item_repo.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "healthy": true }))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "healthy": false,
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}

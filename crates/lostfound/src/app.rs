use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        health::{health, livez, readyz},
        items::{create_item, get_item, list_items, search_items},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item))
        .route("/items/search/{keyword}", get(search_items))
        .route("/health", get(health));

    Router::new()
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

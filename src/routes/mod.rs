use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{response::ErrorResponse, state::AppState};

pub mod categories;
pub mod doc;
pub mod health;
pub mod products;
pub mod wishlists;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/wishlists", wishlists::router())
}

/// Full application: health check, `/api`, docs and the 404 fallback, bound to `state`.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    let body = ErrorResponse {
        message: "Not Found".to_string(),
        error: Some(format!("No route for {}", uri.path())),
    };
    (StatusCode::NOT_FOUND, Json(body))
}

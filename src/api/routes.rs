//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health, home, info, not_found, AppState};

/// Create the API router.
///
/// Only `GET` is routed; other methods on a known path fall through to the
/// same 404 as an unknown path.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home).fallback(not_found))
        .route("/health", get(health).fallback(not_found))
        .route("/info", get(info).fallback(not_found))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

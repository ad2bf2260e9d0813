//! HTTP API handlers.

use axum::{extract::State, http::StatusCode, http::Uri, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::config::Config;

/// Greeting returned by the root endpoint.
pub const HOME_MESSAGE: &str = "Hello World! API Avengers CI/CD Pipeline Demo";
/// Version reported by the root endpoint.
pub const API_VERSION: &str = "1.0.0";
/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "demo-app";
/// Application name reported by the info endpoint.
pub const APP_NAME: &str = "API Avengers Demo";
/// Runtime version string reported by the info endpoint.
pub const PYTHON_VERSION: &str = "3.9+";

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration captured at startup.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new app state.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    /// Greeting.
    pub message: &'static str,
    /// Always "success".
    pub status: &'static str,
    /// API version.
    pub version: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
}

/// Info endpoint response.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Application name.
    pub app: &'static str,
    /// Value of `ENV` at startup.
    pub environment: String,
    pub python_version: &'static str,
}

/// Body for unmatched routes.
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub error: &'static str,
    /// Request path that did not match.
    pub path: String,
}

/// Root handler - greeting and version.
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: HOME_MESSAGE,
        status: "success",
        version: API_VERSION,
    })
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            service: SERVICE_NAME,
        }),
    )
}

/// Info handler - app name and deployment environment.
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        app: APP_NAME,
        environment: state.config.env.clone(),
        python_version: PYTHON_VERSION,
    })
}

/// Fallback for any path or method without a route.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "no route matched");

    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "not found",
            path: uri.path().to_string(),
        }),
    )
}

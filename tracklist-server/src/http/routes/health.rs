//! Health check endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'static str>,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: Some(env!("CARGO_PKG_VERSION")),
    })
}

/// GET /health/db - one round-trip to the store
async fn health_db(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    state.catalog.ping().await?;
    Ok(Json(HealthResponse {
        status: "ok",
        version: None,
    }))
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/health/db", get(health_db))
}

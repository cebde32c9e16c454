//! Health check controller.

use crate::{
    responses::{ok, ApiResult, Envelope},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Creates the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
}

/// Health check endpoint.
pub async fn health_check() -> ApiResult<HealthResponse> {
    ok(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint. Fails with 503 while the data source is down.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.data_source.ping().await {
        Ok(()) => Envelope::message(StatusCode::OK, "Ready"),
        Err(err) => {
            warn!(error = %err, "Readiness check failed");
            Envelope::message(StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
        }
    }
}

/// Liveness check endpoint.
pub async fn liveness_check() -> Envelope<()> {
    Envelope::message(StatusCode::OK, "Alive")
}

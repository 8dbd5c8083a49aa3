//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::server::state::AppState;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Whether `/api/{collection}/` serves fixture data
    pub fixtures: bool,
    /// Whether the built front-end entry page exists
    pub frontend: bool,
}

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// A missing front-end build degrades the server; the fixture API still works.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let frontend = tokio::fs::metadata(state.index_file())
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);

    let status = if frontend { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        fixtures: state.has_fixtures(),
        frontend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}

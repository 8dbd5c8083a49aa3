//! OctoFit Development Server
//!
//! Serves the built front-end and, optionally, a fixture copy of the OctoFit
//! REST API so the UI can be exercised without the Django backend.
//!
//! # Endpoints
//!
//! ## Fixture API
//! - `GET /api/:collection/` - Collection items (users, teams, activities, workouts, leaderboard)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! ## Front-end
//! - `GET /*` - Static assets from the dist directory, `index.html` for anything else
//!
//! # Example
//!
//! ```rust,ignore
//! use octofit::config::Config;
//! use octofit::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let state = AppState::from_config(&config)?;
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/:collection", get(routes::collections::list_collection))
        .route("/:collection/", get(routes::collections::list_collection));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let spa = routes::spa::spa_service(&state);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("OctoFit server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("OctoFit server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{EnvelopeStyle, Fixtures};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>octofit</body></html>";

    fn create_test_app(fixtures: Option<Fixtures>, envelope: EnvelopeStyle) -> (Router, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('octofit')").unwrap();

        let state = AppState::new(dir.path(), fixtures, envelope);
        (build_router(state), dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let (status, bytes) = get(app, uri).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(None, EnvelopeStyle::Paginated);
        let (status, _) = get(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(Some(Fixtures::seed()), EnvelopeStyle::Paginated);
        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["fixtures"], true);
        assert_eq!(body["frontend"], true);
    }

    #[tokio::test]
    async fn test_collection_paginated() {
        let (app, _dir) = create_test_app(Some(Fixtures::seed()), EnvelopeStyle::Paginated);
        let (status, body) = get_json(app, "/api/teams/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        assert_eq!(body["results"][0]["name"], "Marvel");
    }

    #[tokio::test]
    async fn test_collection_bare_without_trailing_slash() {
        let (app, _dir) = create_test_app(Some(Fixtures::seed()), EnvelopeStyle::Bare);
        let (status, body) = get_json(app, "/api/workouts").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(2));
        assert_eq!(body[0]["name"], "Morning Cardio");
    }

    #[tokio::test]
    async fn test_unknown_collection_is_json_404() {
        let (app, _dir) = create_test_app(Some(Fixtures::seed()), EnvelopeStyle::Paginated);
        let (status, body) = get_json(app, "/api/badges/").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["request_id"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_disabled_fixtures_are_404() {
        let (app, _dir) = create_test_app(None, EnvelopeStyle::Paginated);
        let (status, body) = get_json(app, "/api/users/").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Not found: Fixture API is disabled");
    }

    #[tokio::test]
    async fn test_client_routes_get_index() {
        for uri in ["/", "/users", "/leaderboard", "/no/such/page"] {
            let (app, _dir) = create_test_app(None, EnvelopeStyle::Paginated);
            let (status, body) = get(app, uri).await;

            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body, INDEX.as_bytes(), "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_static_assets_are_served() {
        let (app, _dir) = create_test_app(None, EnvelopeStyle::Paginated);
        let (status, body) = get(app, "/app.js").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"console.log('octofit')");
    }
}

//! OctoFit API Client
//!
//! Native counterpart of the front-end's fetch: one GET per collection with no
//! headers or body, mapped onto the same [`FetchError`] the views use.

use serde_json::Value;
use std::time::Duration;

use octofit_core::{to_list, ApiBase, Collection, FetchError};

/// Read-only HTTP client for the collection endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: ApiBase,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: ApiBase, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { base, http })
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Raw response body of a collection endpoint
    pub async fn fetch_body(&self, collection: Collection) -> Result<Value, FetchError> {
        let url = self.base.endpoint(collection);
        tracing::debug!(url = %url, "Fetching collection");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "Collection request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Collection items, normalized from either response shape
    pub async fn get(&self, collection: Collection) -> Result<Vec<Value>, FetchError> {
        let items = to_list(self.fetch_body(collection).await?);
        tracing::debug!(collection = %collection, count = items.len(), "Fetched collection");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{EnvelopeStyle, Fixtures};
    use crate::server::{build_router, AppState};
    use octofit_core::ViewStatus;

    /// Run a fixture server on an ephemeral port and point a client at it
    async fn spawn_fixture_server(envelope: EnvelopeStyle) -> ApiClient {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(dir.path(), Some(Fixtures::seed()), envelope);
        let router = build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _dir = dir;
            axum::serve(listener, router).await.unwrap();
        });

        let base = ApiBase::new(format!("http://{}/api", addr));
        ApiClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_both_envelopes_yield_same_items() {
        let bare = spawn_fixture_server(EnvelopeStyle::Bare).await;
        let paginated = spawn_fixture_server(EnvelopeStyle::Paginated).await;

        for collection in Collection::ALL {
            let a = bare.get(collection).await.unwrap();
            let b = paginated.get(collection).await.unwrap();
            assert_eq!(a, b, "{}", collection);
        }
    }

    #[tokio::test]
    async fn test_fetched_users_render() {
        let client = spawn_fixture_server(EnvelopeStyle::Paginated).await;

        let mut status = ViewStatus::Loading;
        assert!(status.resolve(client.get(Collection::Users).await));

        let items = match &status {
            ViewStatus::Loaded(items) => items,
            other => panic!("unexpected status {:?}", other),
        };
        let table = Collection::Users.table(items);
        assert_eq!(table.len(), 4);
        assert_eq!(table.row_texts(0)[1], "@tony");
        assert_eq!(table.row_texts(0)[2], "tony@marvel.com");
    }

    #[tokio::test]
    async fn test_http_error_maps_to_status() {
        let router = axum::Router::new().route(
            "/api/users/",
            axum::routing::get(|| async { axum::http::StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client = ApiClient::new(
            ApiBase::new(format!("http://{}/api", addr)),
            Duration::from_secs(5),
        )
        .unwrap();

        let err = client.get(Collection::Users).await.unwrap_err();
        assert_eq!(err, FetchError::Status(500));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let router = axum::Router::new().route(
            "/api/teams/",
            axum::routing::get(|| async { "<html>not json</html>" }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let client = ApiClient::new(
            ApiBase::new(format!("http://{}/api", addr)),
            Duration::from_secs(5),
        )
        .unwrap();

        let err = client.get(Collection::Teams).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = ApiClient::new(
            ApiBase::new("http://127.0.0.1:9/api"),
            Duration::from_secs(2),
        )
        .unwrap();

        let err = client.get(Collection::Teams).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}

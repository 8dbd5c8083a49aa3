//! HTTP API Client
//!
//! The one collaborator that talks to the OctoFit REST API. Views ask it for a
//! collection; it owns the base URL and the envelope normalization.

use gloo_net::http::Request;
use leptos::*;
use serde_json::Value;
use web_sys::AbortSignal;

use octofit_core::{to_list, ApiBase, Collection, FetchError};

/// Read-only client for the five collection endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: ApiBase,
}

impl ApiClient {
    pub fn new(base: ApiBase) -> Self {
        Self { base }
    }

    /// Resolve the base URL from build-time environment.
    ///
    /// `OCTOFIT_API_URL` replaces the URL outright; otherwise `CODESPACE_NAME`
    /// selects the forwarded-port host, defaulting to `localhost`.
    pub fn from_build_env() -> Self {
        Self::new(ApiBase::resolve(
            option_env!("OCTOFIT_API_URL"),
            option_env!("CODESPACE_NAME"),
        ))
    }

    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Fetch one collection, normalized to its list of items.
    ///
    /// Issues a single GET with no headers or body. Passing an abort signal lets
    /// the caller cancel the request; a cancelled request fails with a transport error.
    pub async fn get(
        &self,
        collection: Collection,
        abort: Option<&AbortSignal>,
    ) -> Result<Vec<Value>, FetchError> {
        let url = self.base.endpoint(collection);
        web_sys::console::log_1(&format!("Fetching {} from: {}", collection, url).into());

        let response = Request::get(&url)
            .abort_signal(abort)
            .send()
            .await
            .map_err(|e| FetchError::Transport(transport_message(e)))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(to_list(body))
    }
}

/// Browser message of a failed request, without the JS error name.
///
/// A refused connection surfaces as `Failed to fetch` rather than
/// `TypeError: Failed to fetch`.
fn transport_message(error: gloo_net::Error) -> String {
    match error {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    }
}

/// Make the client available to every view below the caller
pub fn provide_api_client(client: ApiClient) {
    provide_context(client);
}

/// The client provided at the app root
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_collection_urls_from_base() {
        let client = ApiClient::new(ApiBase::new("http://127.0.0.1:8000/api/"));
        assert_eq!(
            client.base().endpoint(Collection::Users),
            "http://127.0.0.1:8000/api/users/"
        );
    }

    #[test]
    fn test_non_js_errors_keep_their_text() {
        let message = transport_message(gloo_net::Error::GlooError("request aborted".into()));
        assert_eq!(message, "request aborted");
    }

    #[test]
    fn test_build_env_uses_forwarded_port_host() {
        if option_env!("OCTOFIT_API_URL").is_none() {
            let client = ApiClient::from_build_env();
            assert!(client.base().as_str().ends_with("-8000.app.github.dev/api"));
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn refused_connection_reports_bare_browser_message() {
        let client = ApiClient::new(ApiBase::new("http://127.0.0.1:9/api"));
        let err = client.get(Collection::Users, None).await.unwrap_err();

        match err {
            FetchError::Transport(message) => {
                assert!(!message.is_empty());
                assert!(!message.starts_with("TypeError"), "{}", message);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}

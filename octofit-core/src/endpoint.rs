//! API Endpoint Resolution
//!
//! The OctoFit API is reached through a forwarded port on a Codespaces host:
//! `https://{instance}-8000.app.github.dev/api`. The instance identifier comes from
//! the environment and falls back to `localhost`. An explicit base URL replaces the
//! pattern entirely.
//!
//! The base is resolved once and handed to whoever issues requests; views never
//! rebuild it themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::collection::Collection;

/// Instance identifier used when none is configured
pub const DEFAULT_INSTANCE: &str = "localhost";

/// Port the API is forwarded on
pub const API_PORT: u16 = 8000;

/// Host suffix of forwarded Codespaces ports
pub const HOST_SUFFIX: &str = "app.github.dev";

/// Resolved API base URL, without trailing slash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiBase(String);

impl ApiBase {
    /// Build the forwarded-port URL for an instance; blank or missing means `localhost`
    pub fn for_instance(instance: Option<&str>) -> Self {
        let instance = instance
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_INSTANCE);
        Self(format!("https://{}-{}.{}/api", instance, API_PORT, HOST_SUFFIX))
    }

    /// Use an explicit base URL as-is
    pub fn new(url: impl AsRef<str>) -> Self {
        Self(url.as_ref().trim().trim_end_matches('/').to_string())
    }

    /// Explicit URL wins over the instance pattern
    pub fn resolve(base_url: Option<&str>, instance: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::for_instance(instance),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full URL of a collection endpoint, e.g. `{base}/users/`
    pub fn endpoint(&self, collection: Collection) -> String {
        format!("{}/{}/", self.0, collection.slug())
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self::for_instance(None)
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_instance_is_localhost() {
        assert_eq!(
            ApiBase::default().as_str(),
            "https://localhost-8000.app.github.dev/api"
        );
        assert_eq!(ApiBase::for_instance(Some("  ")), ApiBase::default());
    }

    #[test]
    fn test_named_instance() {
        let base = ApiBase::for_instance(Some("fluffy-space-guide-x7"));
        assert_eq!(
            base.endpoint(Collection::Teams),
            "https://fluffy-space-guide-x7-8000.app.github.dev/api/teams/"
        );
    }

    #[test]
    fn test_explicit_url_overrides_instance() {
        let base = ApiBase::resolve(Some("http://127.0.0.1:8000/api/"), Some("ignored"));
        assert_eq!(base.as_str(), "http://127.0.0.1:8000/api");
        assert_eq!(
            base.endpoint(Collection::Leaderboard),
            "http://127.0.0.1:8000/api/leaderboard/"
        );
    }

    #[test]
    fn test_blank_explicit_url_falls_back() {
        let base = ApiBase::resolve(Some(""), Some("demo"));
        assert_eq!(base.as_str(), "https://demo-8000.app.github.dev/api");
    }
}

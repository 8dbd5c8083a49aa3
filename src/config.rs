//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use octofit_core::ApiBase;

use crate::fixtures::EnvelopeStyle;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub fixtures: FixturesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Development server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built front-end (trunk output)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    octofit_core::API_PORT
}

fn default_dist_dir() -> String {
    "octofit-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Remote API the CLI talks to
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Codespace name; blank means `localhost`
    #[serde(default)]
    pub instance: Option<String>,

    /// Replaces the forwarded-port URL entirely
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            instance: None,
            base_url: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn base(&self) -> ApiBase {
        ApiBase::resolve(self.base_url.as_deref(), self.instance.as_deref())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Fixture API served next to the front-end
#[derive(Debug, Clone, Deserialize)]
pub struct FixturesConfig {
    #[serde(default = "default_fixtures_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub envelope: EnvelopeStyle,

    /// JSON file replacing the built-in seed
    #[serde(default)]
    pub file: Option<String>,
}

fn default_fixtures_enabled() -> bool {
    true
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            enabled: default_fixtures_enabled(),
            envelope: EnvelopeStyle::default(),
            file: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load an explicit file, or fall back to the default locations
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::load_default()),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("octofit").join("config.toml")),
            Some(PathBuf::from("./octofit.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        // Fall back to environment-only config
        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any variable source
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("OCTOFIT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("OCTOFIT_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid OCTOFIT_PORT: {}", port),
            }
        }
        if let Some(dist_dir) = var("OCTOFIT_DIST_DIR") {
            self.server.dist_dir = dist_dir;
        }

        // Fixture overrides
        if let Some(enabled) = var("OCTOFIT_FIXTURES") {
            self.fixtures.enabled = enabled.to_lowercase() != "false" && enabled != "0";
        }
        if let Some(envelope) = var("OCTOFIT_ENVELOPE") {
            match envelope.parse() {
                Ok(style) => self.fixtures.envelope = style,
                Err(e) => tracing::warn!("Ignoring OCTOFIT_ENVELOPE: {}", e),
            }
        }

        // API overrides
        if let Some(url) = var("OCTOFIT_API_URL") {
            self.api.base_url = Some(url);
        }
        if let Some(instance) = var("CODESPACE_NAME") {
            self.api.instance = Some(instance);
        }

        // Logging overrides
        if let Some(level) = var("OCTOFIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("OCTOFIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# OctoFit Configuration
#
# Environment variables override these settings:
# - OCTOFIT_HOST
# - OCTOFIT_PORT
# - OCTOFIT_DIST_DIR
# - OCTOFIT_FIXTURES
# - OCTOFIT_ENVELOPE
# - OCTOFIT_API_URL
# - CODESPACE_NAME
# - OCTOFIT_LOG_LEVEL
# - OCTOFIT_LOG_FORMAT

[server]
# Development server host
host = "0.0.0.0"

# Development server port (same as the forwarded API port)
port = 8000

# Built front-end served for every client route
dist_dir = "octofit-ui/dist"

[api]
# Codespace name used to build https://{instance}-8000.app.github.dev/api
# instance = "my-codespace"

# Explicit API base URL; replaces the Codespaces URL when set
# base_url = "http://localhost:8000/api"

# Request timeout in seconds
timeout_secs = 30

[fixtures]
# Serve seed data under /api/{collection}/
enabled = true

# Response shape: bare (JSON array) or paginated ({count, next, previous, results})
envelope = "paginated"

# Optional JSON file keyed by collection slug, replaces the built-in seed
# file = "fixtures.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.addr(), "0.0.0.0:8000");
        assert!(config.fixtures.enabled);
        assert_eq!(config.fixtures.envelope, EnvelopeStyle::Paginated);
        assert_eq!(
            config.api.base().as_str(),
            "https://localhost-8000.app.github.dev/api"
        );
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.server.addr(), defaults.server.addr());
        assert_eq!(config.server.dist_dir, defaults.server.dist_dir);
        assert_eq!(config.fixtures.envelope, defaults.fixtures.envelope);
        assert_eq!(config.api.base(), defaults.api.base());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9000

[api]
instance = "fluffy-robot"

[fixtures]
envelope = "bare"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.fixtures.envelope, EnvelopeStyle::Bare);
        assert_eq!(
            config.api.base().as_str(),
            "https://fluffy-robot-8000.app.github.dev/api"
        );
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/octofit.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[
            ("OCTOFIT_PORT", "8123"),
            ("OCTOFIT_FIXTURES", "false"),
            ("OCTOFIT_ENVELOPE", "bare"),
            ("CODESPACE_NAME", "space"),
            ("OCTOFIT_LOG_FORMAT", "json"),
        ]));

        assert_eq!(config.server.port, 8123);
        assert!(!config.fixtures.enabled);
        assert_eq!(config.fixtures.envelope, EnvelopeStyle::Bare);
        assert_eq!(config.api.base().as_str(), "https://space-8000.app.github.dev/api");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_api_url_override_wins_over_instance() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[
            ("CODESPACE_NAME", "space"),
            ("OCTOFIT_API_URL", "http://127.0.0.1:8000/api/"),
        ]));
        assert_eq!(config.api.base().as_str(), "http://127.0.0.1:8000/api");
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(vars(&[
            ("OCTOFIT_PORT", "not-a-port"),
            ("OCTOFIT_ENVELOPE", "xml"),
        ]));
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.fixtures.envelope, EnvelopeStyle::Paginated);
    }
}

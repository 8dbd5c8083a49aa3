//! # OctoFit
//!
//! Native tooling for the OctoFit Tracker front-end: a development server that
//! serves the built single-page app with an optional fixture API, and a client
//! that reads the five collections from a live API.
//!
//! ## Modules
//!
//! - [`server`]: Axum server for the SPA and fixture collections
//! - [`client`]: HTTP client for `/api/{collection}/`
//! - [`fixtures`]: Seed data and fixture files
//! - [`output`]: Text rendering of collection screens
//! - [`config`]: TOML configuration with environment overrides
//! - [`logging`]: `tracing` subscriber setup
//!
//! Domain logic shared with the web UI lives in [`octofit_core`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octofit::client::ApiClient;
//! use octofit::output::render_screen;
//! use octofit_core::{ApiBase, Collection, ViewStatus};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiBase::for_instance(None), Duration::from_secs(30))?;
//!
//!     let mut status = ViewStatus::Loading;
//!     status.resolve(client.get(Collection::Leaderboard).await);
//!
//!     print!("{}", render_screen(&status.screen(Collection::Leaderboard)));
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod fixtures;
pub mod logging;
pub mod output;
pub mod server;

// Re-export top-level types for convenience
pub use client::ApiClient;
pub use config::{
    generate_default_config, ApiConfig, Config, ConfigError, FixturesConfig, LoggingConfig,
    ServerConfig,
};
pub use fixtures::{EnvelopeStyle, FixtureError, Fixtures};
pub use server::{build_router, serve, ApiError, AppState};

//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::fixtures::{EnvelopeStyle, FixtureError, Fixtures};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Built front-end directory
    pub dist_dir: PathBuf,
    /// Collections served under `/api`; `None` disables the fixture API
    pub fixtures: Option<Arc<Fixtures>>,
    /// Response shape of the fixture API
    pub envelope: EnvelopeStyle,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        dist_dir: impl Into<PathBuf>,
        fixtures: Option<Fixtures>,
        envelope: EnvelopeStyle,
    ) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            fixtures: fixtures.map(Arc::new),
            envelope,
            start_time: Instant::now(),
        }
    }

    /// Build state from configuration, reading the fixture file if one is set
    pub fn from_config(config: &Config) -> Result<Self, FixtureError> {
        let fixtures = if config.fixtures.enabled {
            Some(match &config.fixtures.file {
                Some(path) => Fixtures::load(Path::new(path))?,
                None => Fixtures::seed(),
            })
        } else {
            None
        };

        Ok(Self::new(
            &config.server.dist_dir,
            fixtures,
            config.fixtures.envelope,
        ))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn has_fixtures(&self) -> bool {
        self.fixtures.is_some()
    }

    /// Entry page served for every client route
    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

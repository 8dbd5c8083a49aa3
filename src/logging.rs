//! Logging Setup
//!
//! Installs the global `tracing` subscriber for the native binaries. `RUST_LOG`
//! takes precedence over the configured level; the format is `pretty` for
//! development or `json` for log collectors. Output goes to stderr so the
//! CLI's stdout carries only command output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter used when `RUST_LOG` is unset
pub fn default_directives(level: &str) -> String {
    format!("octofit={level},octofit_core={level},tower_http=debug")
}

/// Install the global subscriber. Call once, first thing in `main`.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directives(&config.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .flatten_event(true),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        let directives = default_directives("debug");
        assert_eq!(directives, "octofit=debug,octofit_core=debug,tower_http=debug");
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}

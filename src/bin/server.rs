//! OctoFit Development Server
//!
//! Run with: cargo run --bin octofit-server
//!
//! Serves the built front-end (`trunk build` output) and the fixture API on the
//! port the front-end expects the API on.
//!
//! # Configuration
//!
//! Settings come from `--config`, `~/.config/octofit/config.toml` or
//! `./octofit.toml`, then environment variables (`OCTOFIT_HOST`, `OCTOFIT_PORT`,
//! `OCTOFIT_DIST_DIR`, `OCTOFIT_FIXTURES`, `OCTOFIT_ENVELOPE`), then flags.
//! `RUST_LOG` overrides the configured log level.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use octofit::config::Config;
use octofit::fixtures::EnvelopeStyle;
use octofit::logging::init_tracing;
use octofit::server::{serve, AppState};

#[derive(Parser)]
#[command(name = "octofit-server")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the OctoFit Tracker front-end and fixture API")]
struct Args {
    /// Config file (default: ~/.config/octofit/config.toml or ./octofit.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Built front-end directory
    #[arg(long)]
    dist: Option<String>,

    /// Disable the fixture API under /api
    #[arg(long)]
    no_fixtures: bool,

    /// Fixture response shape (bare, paginated)
    #[arg(long)]
    envelope: Option<EnvelopeStyle>,

    /// JSON fixture file replacing the built-in seed
    #[arg(long)]
    fixtures: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load_from(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dist) = args.dist {
        config.server.dist_dir = dist;
    }
    if args.no_fixtures {
        config.fixtures.enabled = false;
    }
    if let Some(envelope) = args.envelope {
        config.fixtures.envelope = envelope;
    }
    if let Some(file) = args.fixtures {
        config.fixtures.file = Some(file);
    }

    init_tracing(&config.logging);

    tracing::info!("Starting OctoFit server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Front-end directory: {}", config.server.dist_dir);

    let state = AppState::from_config(&config).context("Failed to load fixtures")?;
    if state.has_fixtures() {
        tracing::info!(envelope = %config.fixtures.envelope, "Fixture API enabled at /api");
    } else {
        tracing::info!("Fixture API disabled");
    }

    if !state.index_file().is_file() {
        tracing::warn!(
            "{:?} not found; run `trunk build` in octofit-ui first",
            state.index_file()
        );
    }

    serve(state, &config.server).await?;

    tracing::info!("OctoFit server stopped");
    Ok(())
}

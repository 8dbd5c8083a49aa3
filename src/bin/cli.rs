//! OctoFit CLI
//!
//! Command-line interface for the OctoFit API:
//! - List a collection as a table or JSON
//! - Probe every collection endpoint
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use octofit::client::ApiClient;
use octofit::config::{generate_default_config, Config};
use octofit::logging::init_tracing;
use octofit::output::render_screen;
use octofit_core::{classify, to_list, Collection, Screen, ViewStatus};

#[derive(Parser)]
#[command(name = "octofit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read-only client for the OctoFit Tracker API")]
#[command(long_about = "Reads users, teams, activities, workouts and the leaderboard from an OctoFit API\nand prints them the way the web front-end shows them.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (replaces the Codespaces URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Codespace name used to build the API URL
    #[arg(long, global = true)]
    pub instance: Option<String>,

    /// Config file (default: ~/.config/octofit/config.toml or ./octofit.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List one collection
    List {
        /// users, teams, activities, workouts or leaderboard
        collection: Collection,
    },

    /// Check every collection endpoint
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_from(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = Some(url);
    }
    if let Some(instance) = cli.instance {
        config.api.instance = Some(instance);
    }

    init_tracing(&config.logging);

    match cli.command {
        Commands::List { collection } => {
            let client = ApiClient::new(config.api.base(), config.api.timeout())?;
            let result = client.get(collection).await;

            if cli.format == Format::Json {
                let items = result.with_context(|| format!("Failed to fetch {}", collection))?;
                println!("{}", serde_json::to_string_pretty(&items)?);
                return Ok(());
            }

            let mut status = ViewStatus::Loading;
            status.resolve(result);
            let screen = status.screen(collection);
            print!("{}", render_screen(&screen));

            if matches!(screen, Screen::Error { .. }) {
                std::process::exit(1);
            }
        }

        Commands::Status => {
            let client = ApiClient::new(config.api.base(), config.api.timeout())?;
            let mut failures = 0;
            let mut report = Vec::new();

            for collection in Collection::ALL {
                let probe = match client.fetch_body(collection).await {
                    Ok(body) => {
                        let shape = classify(&body);
                        let count = to_list(body).len();
                        serde_json::json!({
                            "collection": collection,
                            "ok": true,
                            "shape": shape,
                            "count": count,
                        })
                    }
                    Err(e) => {
                        failures += 1;
                        serde_json::json!({
                            "collection": collection,
                            "ok": false,
                            "error": e.to_string(),
                        })
                    }
                };
                report.push(probe);
            }

            match cli.format {
                Format::Json => {
                    let body = serde_json::json!({
                        "api": client.base(),
                        "collections": report,
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Format::Table => {
                    println!("OctoFit v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!("API: {}", client.base());
                    println!();
                    println!("{:<14} {:<10} {:<10} {}", "Collection", "Status", "Shape", "Items");
                    println!("{}", "-".repeat(44));
                    for probe in &report {
                        let name = probe["collection"].as_str().unwrap_or("-");
                        if probe["ok"].as_bool().unwrap_or(false) {
                            println!(
                                "{:<14} {:<10} {:<10} {}",
                                name,
                                "ok",
                                probe["shape"].as_str().unwrap_or("-"),
                                probe["count"]
                            );
                        } else {
                            println!(
                                "{:<14} {:<10} {}",
                                name,
                                "error",
                                probe["error"].as_str().unwrap_or("unknown error")
                            );
                        }
                    }
                }
            }

            if failures > 0 {
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

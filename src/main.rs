//! Limelight Server
//!
//! Loads the tweet metrics dataset, aggregates it, and serves the
//! dashboard API.
//!
//! Run with: cargo run -- --dataset tweets.csv
//!
//! # Configuration
//!
//! CLI flags override environment variables, which override the config
//! file:
//! - `LIMELIGHT_DATASET`: Path to the CSV (default: tweets.csv)
//! - `LIMELIGHT_HOST` / `LIMELIGHT_PORT`: Bind address (default: 0.0.0.0:8080)
//! - `LIMELIGHT_DEBUG`: Surface error details in responses (default: false)
//! - `RUST_LOG`: Log filter (default: limelight=info,tower_http=debug)

use clap::Parser;
use limelight::aggregate::EngagementTable;
use limelight::api::{serve, AppState};
use limelight::config::{generate_default_config, Config};
use limelight::dataset::DatasetLoader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "limelight")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Celebrity tweet engagement dashboard")]
struct Cli {
    /// Path to a TOML config file (default: searched in standard locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the tweet metrics CSV
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Debug mode: include error details in API responses
    #[arg(long)]
    debug: bool,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    // Resolve configuration: file < environment < CLI flags
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dataset) = cli.dataset {
        config.dataset.path = dataset;
    }
    if let Some(host) = cli.host {
        config.api.host = host;
    }
    if let Some(port) = cli.port {
        config.api.port = port;
    }
    if cli.debug {
        config.api.debug = true;
    }

    init_tracing(&config);

    tracing::info!("Starting Limelight v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {:?}", config.dataset.path);
    tracing::info!("Debug mode: {}", config.api.debug);

    // Load and aggregate the dataset. Any malformed input is fatal here:
    // the dashboard never serves a partially-loaded table.
    let records = DatasetLoader::new().load(&config.dataset.path)?;
    tracing::info!("Loaded {} records", records.len());

    let table = Arc::new(EngagementTable::from_records(records));
    tracing::info!(
        "Aggregated into {} rows across {} handles",
        table.len(),
        table.handles().len()
    );

    // Serve until shutdown signal
    let state = AppState::new(table, config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("Limelight stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let default_filter = if config.api.debug {
        "limelight=debug,tower_http=debug"
    } else {
        "limelight=info,tower_http=debug"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "{},{}",
            config.logging.level, default_filter
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

// SPDX-License-Identifier: PMPL-1.0-or-later
//! wattplan-server - energy estimation over HTTP

mod app;
mod config;

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// wattplan-server: battery and CO2 estimates for planned activity
/// sequences, backed by measured per-scenario consumption tables.
#[derive(Parser)]
#[command(name = "wattplan-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the configured data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_level);

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let mut config = config::load_config(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    // Apply CLI overrides
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    // The store must be complete before the listener exists; no request
    // can ever observe a partial load.
    let paths = config.table_paths();
    let store = wattplan_store::load_store(&paths).context("loading measurement tables")?;
    info!(
        scenarios = store.scenario_count(),
        devices = store.device_count(),
        "measurement tables loaded"
    );

    let state = app::AppState {
        store: Arc::new(store),
    };
    let router = app::router(state);

    let addr = SocketAddr::from((config.host, config.port));
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .init();
}

//! Patient Dashboard asset host
//!
//! Run with: cargo run --bin patient-dashboard
//!
//! Serves the built frontend and the body/organ images.
//!
//! # Configuration
//!
//! Read from `--config`, or `~/.config/patient-dashboard/config.toml`, or
//! `./dashboard.toml`, then overridden by `DASHBOARD_*` environment
//! variables (see `dashboard-cli config` for the full template).

use clap::Parser;
use std::path::PathBuf;

use patient_dashboard::assets::missing_files;
use patient_dashboard::config::Config;
use patient_dashboard::logging;
use patient_dashboard::server::{serve, ServerState};

#[derive(Parser)]
#[command(name = "patient-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the patient health dashboard")]
struct Args {
    /// Config file (default: standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }

    logging::init(&config.logging);

    tracing::info!("Patient dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Asset directory: {:?}", config.assets.dir);
    tracing::info!("Frontend directory: {:?}", config.server.dist_dir);

    let state = ServerState::from_config(&config);

    match missing_files(&config.assets.dir, &state.catalog) {
        Ok(missing) if missing.is_empty() => tracing::info!("All dashboard images present"),
        Ok(missing) => tracing::warn!("Missing dashboard images: {}", missing.join(", ")),
        Err(e) => tracing::warn!("Cannot read asset directory {:?}: {}", config.assets.dir, e),
    }

    serve(state, &config.server).await?;

    tracing::info!("Patient dashboard stopped");
    Ok(())
}

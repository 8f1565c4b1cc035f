//! Mock backend entry-point: generates the dataset and serves it over HTTP.

mod server;

use std::ffi::OsString;

use actix_web::web;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use birdhouse_mock::inbound::http::health::HealthState;
use birdhouse_mock::settings::MockSettings;
use birdhouse_mock::startup::build_dataset;
use server::{ServerConfig, create_server};

/// `birdhouse-mock` command line.
#[derive(Debug, Parser)]
#[command(
    name = "birdhouse-mock",
    about = "Serve synthetic birdhouse registrations and occupancy history",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a dataset and serve it until interrupted.
    ///
    /// Configure with `BH_*` environment variables, e.g. `BH_SERVE_PORT`.
    Run,
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let Some(Command::Run) = cli.command else {
        info!("no command given; exiting");
        return Ok(());
    };

    // Settings come from the environment and config files only; the command
    // line belongs to clap.
    let settings = MockSettings::load_from_iter([OsString::from("birdhouse-mock")])
        .wrap_err("failed to load settings")?;
    let dataset = build_dataset(&settings).wrap_err("failed to generate dataset")?;

    let config = ServerConfig::new(settings.bind_addr(), dataset);
    info!(bind_addr = %config.bind_addr(), "starting server");
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start server")?;
    server.await.wrap_err("server terminated with an error")
}

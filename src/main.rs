//! opgl-data service entry point.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client ──▶ http (axum, middleware) ──▶ riot::RiotService ──▶ riot::RiotClient ──▶ Riot API
//!                                                   │
//!                                                   └── routing (region → host)
//!
//!     Cross-cutting: config, observability, lifecycle
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use opgl_data::config::load_config;
use opgl_data::http::HttpServer;
use opgl_data::lifecycle::{spawn_signal_listener, Shutdown};
use opgl_data::observability::{logging, metrics};
use opgl_data::riot::{RiotApi, RiotClient};

#[derive(Parser)]
#[command(name = "opgl-data")]
#[command(about = "Riot Games API data service", long_about = None)]
struct Args {
    /// Path to a TOML config file. Environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "opgl-data starting");

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        riot_timeout_secs = config.riot.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        base_url_override = config.riot.base_url.as_deref().unwrap_or("none"),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validated at load time
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let client = RiotClient::from_config(&config.riot)?;
    let service = Arc::new(RiotApi::new(client));

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.signal();
    spawn_signal_listener(shutdown);

    HttpServer::new(config, service).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

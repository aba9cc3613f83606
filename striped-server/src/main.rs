//! striped-server
//!
//! Receives Stripe webhook deliveries, verifies their signatures and hands
//! the events to in-process handlers.

mod api;
mod config;
mod server;
mod shutdown;
mod state;

use clap::Parser;
use config::ConfigLoader;
use server::{build_router, run_server};
use shutdown::spawn_config_reload_handler;
use state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use striped_core::config::ConfigStore;
use striped_core::events::received_event_channel;
use striped_core::processors::{EventRouter, LoggingHandler};
use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// striped - Stripe webhook receiver
#[derive(Parser, Debug)]
#[command(name = "striped-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./striped-config.toml")]
    config: PathBuf,

    /// Override the listen address (e.g., 0.0.0.0:3000)
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Additional webhook signing secret
    #[arg(long, env = "STRIPE_WEBHOOK_SECRET", hide_env_values = true)]
    webhook_secret: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, env = "STRIPED_LOG_JSON", default_value = "false")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.log_json);

    tracing::info!("Starting striped-server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_loader = Arc::new(ConfigLoader::new(
        &args.config,
        args.listen,
        args.webhook_secret.clone(),
    ));
    let loaded_config = config_loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let listen_addr = loaded_config.server.listen;
    tracing::info!(
        secrets = loaded_config.verification.secrets().len(),
        max_age = ?loaded_config.verification.max_age(),
        "Configuration loaded from {:?}",
        args.config
    );

    // Event pipeline
    let (event_tx, event_rx) = received_event_channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let event_router = EventRouter::new(event_rx, shutdown_rx).fallback(Arc::new(LoggingHandler));
    let router_handle = tokio::spawn(event_router.run());

    // Create application state
    let state = AppState::new(
        ConfigStore::new(loaded_config.verification),
        event_tx,
        loaded_config.server.body_limit,
    );

    // Spawn config reload handler (listens for SIGHUP)
    let shutdown_notify = spawn_config_reload_handler(state.clone(), config_loader);

    // Build the router
    let router = build_router(state);

    // Run the server
    tracing::info!("Starting HTTP server on {}", listen_addr);
    let result = run_server(router, listen_addr).await;

    // Signal the config reload handler to stop
    shutdown_notify.notify_one();

    // Let the event router finish what was already acknowledged
    tracing::info!("Waiting for event router...");
    let _ = shutdown_tx.send(true);
    if let Err(e) = router_handle.await {
        tracing::error!("Event router task failed: {}", e);
    }
    tracing::info!("Server shutdown complete");

    result.map_err(Into::into)
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

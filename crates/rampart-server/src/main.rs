//! Rampart server binary: parse flags, init tracing, serve.

use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use rampart_engine::{Engine, JsonFileStore};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rampart", about = "Adaptive tower-conquest bot service")]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value_t = 8080, env = "RAMPART_PORT")]
    port: u16,

    /// Path of the durable knowledge record.
    #[arg(long, default_value = "rampart-knowledge.json", env = "RAMPART_STATE")]
    state: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = JsonFileStore::new(&args.state);
    let engine = Arc::new(Engine::new(Box::new(store)));
    let app = rampart_server::router(engine);

    let listener = tokio::net::TcpListener::bind((Ipv4Addr::UNSPECIFIED, args.port)).await?;
    info!(port = args.port, state = %args.state.display(), "rampart listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("shutdown complete");
    Ok(())
}

/// Resolves on ctrl-c so in-flight requests drain before the process exits.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(error) => warn!(%error, "failed to listen for shutdown signal"),
    }
}

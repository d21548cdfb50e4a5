//! bandpage - Led Zeppelin band page service
//!
//! Serves the artist history and discography API plus the embedded web UI.
//! At startup the featured artist's history text is refreshed from the
//! Gemini generative API; on failure the service keeps the stored text.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bandpage::refresh::refresh_featured_history;
use bandpage::store::JsonFileStore;
use bandpage::{build_router, AppState};

/// Command-line arguments for bandpage
#[derive(Parser, Debug)]
#[command(name = "bandpage")]
#[command(about = "Led Zeppelin band page service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "BANDPAGE_PORT")]
    port: u16,

    /// Path to the artist library JSON file
    #[arg(short, long, default_value = "data.json", env = "BANDPAGE_DATA_FILE")]
    data_file: PathBuf,

    /// Google API key for the history refresh (refresh is skipped without it)
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    google_api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading any environment-backed arguments
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bandpage=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    info!(
        "Starting bandpage v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Artist library: {}", args.data_file.display());

    let store = Arc::new(JsonFileStore::new(args.data_file.clone()));

    // One-shot history refresh; the service starts regardless of the outcome
    refresh_featured_history(store.as_ref(), args.google_api_key.as_deref()).await;

    // Build the application router
    let app = build_router(AppState::new(store));

    // Create socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    info!("Starting HTTP server on {}", addr);

    // Create and run the server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}

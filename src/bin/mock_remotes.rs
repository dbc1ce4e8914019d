//! Mock Remotes - Local stand-in for the remote bank endpoints
//!
//! Serves each record of the mock dataset at `/{id}` so that
//! `GET /v2/banks/all` can be exercised against `data/banks-v2.json`.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bank_bridge::{
    mock::{create_mock_router, MockRemotes},
    Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bank_bridge=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let remotes = MockRemotes::load(&config.mock_remotes_path)
        .with_context(|| format!("failed to load {}", config.mock_remotes_path.display()))?;

    let addr = SocketAddr::from(([127, 0, 0, 1], config.mock_remotes_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Mock remotes listening on http://{} ({} banks)", addr, remotes.len());

    axum::serve(listener, create_mock_router(remotes))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("mock remotes server error")?;

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, stopping mock remotes...");
        }
        _ = terminate => {
            info!("Received SIGTERM, stopping mock remotes...");
        }
    }
}

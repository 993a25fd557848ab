use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use super::config::ServerConfig;
use super::container::Container;
use super::router::{build_router, ENDPOINTS};
use super::shutdown::shutdown_signal;

/// Binds the listener and serves until a shutdown signal arrives.
pub async fn serve(config: ServerConfig, container: Arc<Container>) -> Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}", config.address()))?;

    info!("User registry listening on http://{}", listener.local_addr()?);
    info!("Available endpoints:");
    for (method, path, description) in ENDPOINTS {
        info!("{:<7}{:<12}- {}", method, path, description);
    }

    axum::serve(listener, build_router(container))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

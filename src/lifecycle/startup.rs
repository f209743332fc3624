//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Backends are built before the listener binds (traffic only when ready)

use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ConfigError, StorefrontConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::metrics;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Listener error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bring the service up and serve until a termination signal arrives.
pub async fn run(config: StorefrontConfig) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        catalog = ?config.catalog.backend,
        cart = ?config.cart.backend,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let server = HttpServer::new(config)?;

    let observability = &server.config().observability;
    if observability.metrics_enabled {
        match observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;
    Ok(())
}

//! Storefront product service.
//!
//! Serves product pages and accepts add-to-cart submissions, keeping the
//! visitor's cart identity in a cookie.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                 STOREFRONT                   │
//!                       │                                              │
//!   GET /product/{id}   │  ┌────────┐    ┌─────────┐    ┌──────────┐   │
//!  ─────────────────────┼─▶│  http  │───▶│  pages  │───▶│ catalog  │───┼──▶ commerce API
//!                       │  │ server │    │         │    │(mem/http)│   │    (or memory)
//!   POST .../cart       │  └────────┘    │         │    └──────────┘   │
//!  ─────────────────────┼─▶              │         │    ┌──────────┐   │
//!                       │                │         │───▶│   cart   │───┼──▶ commerce API
//!   303 + Set-Cookie    │                │         │    │(mem/http)│   │    (or memory)
//!  ◀────────────────────┼────────────────│ session │    └──────────┘   │
//!                       │                └─────────┘                   │
//!                       │  config · observability · resilience ·       │
//!                       │  lifecycle                                   │
//!                       └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use storefront::config::{load_config, StorefrontConfig};
use storefront::lifecycle::startup;
use storefront::observability::logging;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront product page and cart service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, env = "STOREFRONT_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => StorefrontConfig::default(),
    };

    logging::init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "storefront starting");

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

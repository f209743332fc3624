//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and backends produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID (`x-request-id`) is attached to every request span
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;

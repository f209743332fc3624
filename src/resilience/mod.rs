//! Resilience for commerce API calls.
//!
//! # Data Flow
//! ```text
//! Catalog read:
//!     → reqwest client (connect/request timeouts from config)
//!     → On failure: retries.rs (check if retryable)
//!     → backoff.rs (exponential delay with jitter)
//! ```
//!
//! # Design Decisions
//! - Every commerce API call has a deadline
//! - Only idempotent reads are retried; cart mutations are not

pub mod backoff;
pub mod retries;

pub use backoff::calculate_backoff;
pub use retries::is_retryable;

//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the storefront.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::Product;
use crate::pricing::Currency;

/// Root configuration for the storefront service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Product catalog backend.
    pub catalog: CatalogConfig,

    /// Cart backend and cart cookie.
    pub cart: CartConfig,

    /// Price display.
    pub pricing: PricingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Timeout configuration for inbound requests and commerce API calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Inbound request timeout in seconds.
    pub request_secs: u64,

    /// Connection establishment timeout to the commerce API in seconds.
    pub upstream_connect_secs: u64,

    /// Total timeout for one commerce API call in seconds.
    pub upstream_request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            upstream_connect_secs: 5,
            upstream_request_secs: 10,
        }
    }
}

/// Where catalog or cart data lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// In-process store.
    #[default]
    Memory,
    /// Remote commerce API over HTTP.
    Http,
}

/// Product catalog configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    pub backend: BackendKind,

    /// Commerce API root, required for the http backend.
    pub base_url: Option<String>,

    /// JSON file holding an array of products (memory backend).
    pub seed_path: Option<PathBuf>,

    /// Inline products (memory backend).
    pub products: Vec<Product>,

    /// Retry policy for catalog reads (http backend).
    pub retries: RetryConfig,
}

/// Cart configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CartConfig {
    pub backend: BackendKind,

    /// Commerce API root, required for the http backend.
    pub base_url: Option<String>,

    pub cookie: CartCookieConfig,

    /// Retry policy for cart lookups (http backend). Mutations are never retried.
    pub retries: RetryConfig,
}

/// Cookie carrying the cart identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CartCookieConfig {
    pub name: String,

    /// Hide the cookie from client-side scripts.
    pub http_only: bool,

    /// Only send over HTTPS.
    pub secure: bool,
}

impl Default for CartCookieConfig {
    fn default() -> Self {
        Self {
            name: "cartId".to_string(),
            http_only: true,
            secure: false,
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Enable retries.
    pub enabled: bool,

    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,

    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: 3,
            base_delay_ms: 100,
            max_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PricingConfig {
    pub currency: Currency,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 64 * 1024, // form posts only
        }
    }
}

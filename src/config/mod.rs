//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → StorefrontConfig (validated, immutable)
//!     → catalog / cart backends built from it at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_seed_products, ConfigError};
pub use schema::StorefrontConfig;
pub use schema::{
    BackendKind, CartConfig, CartCookieConfig, CatalogConfig, ListenerConfig,
    ObservabilityConfig, RetryConfig, TimeoutConfig,
};

//! Storefront product service library.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pricing;
pub mod resilience;
pub mod upstream;

pub use config::schema::StorefrontConfig;
pub use error::StorefrontError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

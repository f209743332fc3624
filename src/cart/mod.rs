//! Cart service.
//!
//! # Data Flow
//! ```text
//! add-to-cart submission
//!     → cart id from cookie (may be absent or stale)
//!     → get_or_create_cart (reuse known cart, else create)
//!     → cookie (re)issued with the resolved id
//!     → add_to_cart (merge into existing line or append)
//! ```

pub mod http;
pub mod memory;
pub mod types;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{BackendKind, ConfigError, StorefrontConfig};
use crate::error::Result;
use crate::observability::metrics;
use crate::upstream::UpstreamClient;

pub use http::HttpCartStore;
pub use memory::MemoryCartStore;
pub use types::{Cart, CartId, CartItem};

#[async_trait]
pub trait CartStore: Send + Sync {
    /// Look up a cart. `Ok(None)` when the id is unknown.
    async fn get_cart(&self, id: &CartId) -> Result<Option<Cart>>;

    /// Create an empty cart with a fresh id.
    async fn create_cart(&self) -> Result<Cart>;

    /// Add one unit of `product_id` to the cart.
    async fn add_to_cart(&self, id: &CartId, product_id: &str) -> Result<Cart>;

    /// Resolve the visitor's cart, creating one when `existing` is absent or unknown.
    async fn get_or_create_cart(&self, existing: Option<&CartId>) -> Result<Cart> {
        if let Some(id) = existing {
            if let Some(cart) = self.get_cart(id).await? {
                return Ok(cart);
            }
            tracing::debug!(cart_id = %id, "Cart cookie refers to unknown cart");
        }

        let cart = self.create_cart().await?;
        metrics::record_cart_created();
        tracing::info!(cart_id = %cart.id, "Created cart");
        Ok(cart)
    }
}

/// Construct the cart backend selected in `config`.
pub fn build(config: &StorefrontConfig) -> std::result::Result<Arc<dyn CartStore>, ConfigError> {
    match config.cart.backend {
        BackendKind::Memory => {
            tracing::info!("Using in-memory cart store");
            Ok(Arc::new(MemoryCartStore::new()))
        }
        BackendKind::Http => {
            let base_url = config.cart.base_url.as_deref().unwrap_or_default();
            let upstream = UpstreamClient::new(base_url, &config.timeouts)?;
            tracing::info!(base_url = %upstream.base_url(), "Using remote cart store");
            Ok(Arc::new(HttpCartStore::new(upstream, config.cart.retries.clone())))
        }
    }
}

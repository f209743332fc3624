//! Cart store backed by the remote commerce API.
//!
//! - `GET {base}/carts/{id}` → `Cart` (404 → unknown cart)
//! - `POST {base}/carts` → new empty `Cart`
//! - `POST {base}/carts/{id}/items` `{"productId", "quantity"}` → updated `Cart`
//!
//! Mutations are sent once; a retried add could double the quantity.

use async_trait::async_trait;
use serde::Serialize;

use crate::cart::{Cart, CartId, CartStore};
use crate::config::RetryConfig;
use crate::error::{Result, StorefrontError};
use crate::upstream::UpstreamClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddItemRequest<'a> {
    product_id: &'a str,
    quantity: u32,
}

pub struct HttpCartStore {
    upstream: UpstreamClient,
    reads: RetryConfig,
}

impl HttpCartStore {
    /// `reads` applies to cart lookups only.
    pub fn new(upstream: UpstreamClient, reads: RetryConfig) -> Self {
        Self { upstream, reads }
    }
}

#[async_trait]
impl CartStore for HttpCartStore {
    async fn get_cart(&self, id: &CartId) -> Result<Option<Cart>> {
        let url = self.upstream.endpoint(&["carts", id.as_str()]);
        self.upstream.get_json(url, &self.reads).await
    }

    async fn create_cart(&self) -> Result<Cart> {
        let url = self.upstream.endpoint(&["carts"]);
        let endpoint = url.to_string();
        self.upstream
            .post_json(url, &serde_json::json!({}))
            .await?
            .ok_or(StorefrontError::UpstreamStatus {
                endpoint,
                status: 404,
            })
    }

    async fn add_to_cart(&self, id: &CartId, product_id: &str) -> Result<Cart> {
        let url = self.upstream.endpoint(&["carts", id.as_str(), "items"]);
        let body = AddItemRequest {
            product_id,
            quantity: 1,
        };
        self.upstream
            .post_json(url, &body)
            .await?
            .ok_or_else(|| StorefrontError::CartNotFound(id.to_string()))
    }
}

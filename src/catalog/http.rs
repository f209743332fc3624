//! Catalog backed by the remote commerce API.
//!
//! - `GET {base}/products/{id}` → `Product` (404 → unknown id)
//! - `GET {base}/products` → `[Product]`

use async_trait::async_trait;

use crate::catalog::{Catalog, Product};
use crate::config::RetryConfig;
use crate::error::Result;
use crate::upstream::UpstreamClient;

pub struct HttpCatalog {
    upstream: UpstreamClient,
    retries: RetryConfig,
}

impl HttpCatalog {
    pub fn new(upstream: UpstreamClient, retries: RetryConfig) -> Self {
        Self { upstream, retries }
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let url = self.upstream.endpoint(&["products", id]);
        self.upstream.get_json(url, &self.retries).await
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let url = self.upstream.endpoint(&["products"]);
        let products: Option<Vec<Product>> = self.upstream.get_json(url, &self.retries).await?;
        Ok(products.unwrap_or_default())
    }
}

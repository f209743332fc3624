//! Product catalog.
//!
//! The storefront only reads the catalog: one product for the product page,
//! the full listing for anything that needs to enumerate products.

pub mod http;
pub mod memory;
pub mod types;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::validation::check_products;
use crate::config::{load_seed_products, BackendKind, ConfigError, StorefrontConfig};
use crate::error::Result;
use crate::upstream::UpstreamClient;

pub use http::HttpCatalog;
pub use memory::MemoryCatalog;
pub use types::{Category, Product, ProductImage};

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Look up one product. `Ok(None)` when the id is unknown.
    async fn get_product(&self, id: &str) -> Result<Option<Product>>;

    /// All products, in catalog order.
    async fn list_products(&self) -> Result<Vec<Product>>;
}

/// Construct the catalog backend selected in `config`.
pub fn build(config: &StorefrontConfig) -> std::result::Result<Arc<dyn Catalog>, ConfigError> {
    match config.catalog.backend {
        BackendKind::Memory => {
            let mut products = config.catalog.products.clone();
            if let Some(path) = &config.catalog.seed_path {
                products.extend(load_seed_products(path)?);
                // Inline and seed entries must not collide either.
                let errors = check_products(&products);
                if !errors.is_empty() {
                    return Err(ConfigError::Validation(errors));
                }
            }
            let catalog = MemoryCatalog::new(products);
            tracing::info!(products = catalog.len(), "Using in-memory catalog");
            Ok(Arc::new(catalog))
        }
        BackendKind::Http => {
            let base_url = config.catalog.base_url.as_deref().unwrap_or_default();
            let upstream = UpstreamClient::new(base_url, &config.timeouts)?;
            tracing::info!(base_url = %upstream.base_url(), "Using remote catalog");
            Ok(Arc::new(HttpCatalog::new(upstream, config.catalog.retries.clone())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::ValidationError;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            images: vec![],
            price: 100,
            categories: vec![],
        }
    }

    #[tokio::test]
    async fn test_build_merges_inline_and_seed() {
        let path = std::env::temp_dir().join(format!("storefront-{}-seed.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"[{"id":"seeded","name":"Seeded","price":250}]"#).unwrap();

        let mut config = StorefrontConfig::default();
        config.catalog.products = vec![product("inline")];
        config.catalog.seed_path = Some(path.clone());

        let catalog = build(&config).unwrap();
        assert_eq!(catalog.list_products().await.unwrap().len(), 2);
        assert!(catalog.get_product("seeded").await.unwrap().is_some());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_seed_colliding_with_inline_is_rejected() {
        let path = std::env::temp_dir().join(format!("storefront-{}-seed.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"[{"id":"inline","name":"Duplicate","price":250}]"#).unwrap();

        let mut config = StorefrontConfig::default();
        config.catalog.products = vec![product("inline")];
        config.catalog.seed_path = Some(path.clone());

        match build(&config) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, vec![ValidationError::DuplicateProduct("inline".into())])
            }
            Err(other) => panic!("expected validation error, got {other}"),
            Ok(_) => panic!("colliding seed should be rejected"),
        }
        let _ = std::fs::remove_file(path);
    }
}

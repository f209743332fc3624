//! In-process catalog.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::catalog::{Catalog, Product};
use crate::error::Result;

/// Read-only catalog held in memory, listed in insertion order.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl MemoryCatalog {
    /// Build from a product list. The first product with a given id wins.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::default();
        for product in products {
            if catalog.index.contains_key(&product.id) {
                tracing::warn!(product_id = %product.id, "Duplicate product id ignored");
                continue;
            }
            catalog.index.insert(product.id.clone(), catalog.products.len());
            catalog.products.push(product);
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.index.get(id).map(|&i| self.products[i].clone()))
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

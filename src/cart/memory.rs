//! In-process cart store.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use crate::cart::{Cart, CartId, CartStore};
use crate::error::{Result, StorefrontError};

/// Thread-safe cart store. Clones share the same carts.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStore {
    carts: Arc<DashMap<CartId, Cart>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn get_cart(&self, id: &CartId) -> Result<Option<Cart>> {
        Ok(self.carts.get(id).map(|entry| entry.value().clone()))
    }

    async fn create_cart(&self) -> Result<Cart> {
        let cart = Cart::new(CartId::generate());
        self.carts.insert(cart.id.clone(), cart.clone());
        Ok(cart)
    }

    async fn add_to_cart(&self, id: &CartId, product_id: &str) -> Result<Cart> {
        // The shard lock is held across the read-modify-write.
        let mut entry = self
            .carts
            .get_mut(id)
            .ok_or_else(|| StorefrontError::CartNotFound(id.to_string()))?;
        entry.value_mut().add_item(product_id);
        Ok(entry.value().clone())
    }
}

//! Cart data model.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque cart identifier, the value carried by the cart cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CartId(String);

impl CartId {
    /// Fresh random identifier for a new cart.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CartId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CartId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One cart line. A product appears at most once per cart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Cart {
    pub id: CartId,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self { id, items: Vec::new() }
    }

    /// Add one unit of `product_id`, merging into an existing line.
    pub fn add_item(&mut self, product_id: &str) {
        match self.items.iter_mut().find(|item| item.product_id == product_id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem {
                product_id: product_id.to_string(),
                quantity: 1,
            }),
        }
    }

    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.items
            .iter()
            .find(|item| item.product_id == product_id)
            .map_or(0, |item| item.quantity)
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

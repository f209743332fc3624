//! Catalog data model.

use serde::{Deserialize, Serialize};

/// A sellable catalog entry. `price` is in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    pub price: i64,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Product {
    /// The image shown on the product page.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    /// The category shown above the product name.
    pub fn primary_category(&self) -> Option<&Category> {
        self.categories.first()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

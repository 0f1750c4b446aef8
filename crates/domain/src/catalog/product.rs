//! Catalog records.

use chrono::{DateTime, Utc};
use common::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    pub average: f64,
    pub count: u32,
}

/// A product offered by the storefront.
///
/// Products are built once when the catalog is loaded and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// URL-safe unique handle.
    pub slug: String,
    pub description: String,
    pub price: Money,
    /// Original price shown struck through, if the product is discounted.
    pub compare_at_price: Option<Money>,
    /// Image URLs; the first one is used as the cart thumbnail.
    pub images: Vec<String>,
    /// Display name of the product's category.
    pub category: String,
    pub tags: Vec<String>,
    pub stock: u32,
    pub ratings: Option<Ratings>,
    pub is_featured: bool,
    pub is_new: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the image captured on cart items, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub description: String,
}

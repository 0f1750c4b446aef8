//! Read-only product catalog.

mod product;
mod seed;
mod static_catalog;

pub use product::{Category, Product, Ratings};
pub use static_catalog::StaticCatalog;

use common::{CategoryId, ProductId};
use thiserror::Error;

/// Read access to products and categories.
///
/// Lookups return `None` rather than an error when nothing matches;
/// callers decide how to report a miss. Implementations must be safe
/// for any number of concurrent readers.
pub trait Catalog: Send + Sync {
    /// Finds a product by identifier.
    fn find_by_id(&self, id: ProductId) -> Option<&Product>;

    /// Finds a product by slug.
    fn find_by_slug(&self, slug: &str) -> Option<&Product>;

    /// Returns every product in catalog order.
    fn list_all(&self) -> &[Product];

    /// Returns the featured products in catalog order.
    fn list_featured(&self) -> Vec<&Product> {
        self.list_all().iter().filter(|p| p.is_featured).collect()
    }

    /// Returns every category in catalog order.
    fn list_categories(&self) -> &[Category];

    /// Finds a category by slug.
    fn find_category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.list_categories().iter().find(|c| c.slug == slug)
    }
}

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an identifier.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// Two products share a slug.
    #[error("Duplicate product slug: {0}")]
    DuplicateProductSlug(String),

    /// Two categories share an identifier.
    #[error("Duplicate category id: {0}")]
    DuplicateCategoryId(CategoryId),

    /// A product cannot be added to a cart without an image.
    #[error("Product {0} has no images")]
    MissingImage(ProductId),

    /// Prices must not be negative.
    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),
}

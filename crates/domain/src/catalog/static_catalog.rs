//! Immutable in-process catalog.

use std::collections::{HashMap, HashSet};

use common::ProductId;

use super::{Catalog, CatalogError, Category, Product, seed};

/// Catalog loaded once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    by_id: HashMap<ProductId, usize>,
    by_slug: HashMap<String, usize>,
}

impl StaticCatalog {
    /// Builds the storefront's built-in catalog.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_parts(seed::products(), seed::categories())
    }

    /// Builds a catalog from explicit products and categories.
    ///
    /// Fails if identifiers or slugs collide, a product has no image,
    /// or a price is negative.
    pub fn from_parts(
        products: Vec<Product>,
        categories: Vec<Category>,
    ) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(products.len());
        let mut by_slug = HashMap::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            if product.images.is_empty() {
                return Err(CatalogError::MissingImage(product.id));
            }
            if product.price.cents() < 0 {
                return Err(CatalogError::NegativePrice(product.id));
            }
            if by_id.insert(product.id, index).is_some() {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
            if by_slug.insert(product.slug.clone(), index).is_some() {
                return Err(CatalogError::DuplicateProductSlug(product.slug.clone()));
            }
        }

        let mut category_ids = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !category_ids.insert(category.id) {
                return Err(CatalogError::DuplicateCategoryId(category.id));
            }
        }

        tracing::debug!(
            products = products.len(),
            categories = categories.len(),
            "catalog loaded"
        );

        Ok(Self {
            products,
            categories,
            by_id,
            by_slug,
        })
    }
}

impl Catalog for StaticCatalog {
    fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).and_then(|&i| self.products.get(i))
    }

    fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.by_slug.get(slug).and_then(|&i| self.products.get(i))
    }

    fn list_all(&self) -> &[Product] {
        &self.products
    }

    fn list_categories(&self) -> &[Category] {
        &self.categories
    }
}

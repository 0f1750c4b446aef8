//! Product catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use chrono::SecondsFormat;
use domain::{CartRepository, Catalog, Product, Ratings};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

// -- Response types --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<f64>,
    pub images: Vec<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<RatingsResponse>,
    pub is_featured: bool,
    pub is_new: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub struct RatingsResponse {
    pub average: f64,
    pub count: u32,
}

impl From<&Ratings> for RatingsResponse {
    fn from(ratings: &Ratings) -> Self {
        Self {
            average: ratings.average,
            count: ratings.count,
        }
    }
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name.clone(),
            slug: product.slug.clone(),
            description: product.description.clone(),
            price: product.price.to_units_f64(),
            compare_at_price: product.compare_at_price.map(|p| p.to_units_f64()),
            images: product.images.clone(),
            category: product.category.clone(),
            tags: product.tags.clone(),
            stock: product.stock,
            ratings: product.ratings.as_ref().map(RatingsResponse::from),
            is_featured: product.is_featured,
            is_new: product.is_new,
            created_at: product
                .created_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            updated_at: product
                .updated_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

// -- Handlers --

/// GET /products — list every product.
#[tracing::instrument(skip(state))]
pub async fn list<R: CartRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Json<Vec<ProductResponse>> {
    Json(
        state
            .catalog
            .list_all()
            .iter()
            .map(ProductResponse::from)
            .collect(),
    )
}

/// GET /products/featured — list featured products.
#[tracing::instrument(skip(state))]
pub async fn featured<R: CartRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Json<Vec<ProductResponse>> {
    Json(
        state
            .catalog
            .list_featured()
            .into_iter()
            .map(ProductResponse::from)
            .collect(),
    )
}

/// GET /products/:slug — look up a product by slug.
#[tracing::instrument(skip(state))]
pub async fn get<R: CartRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(slug): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    state
        .catalog
        .find_by_slug(&slug)
        .map(|product| Json(ProductResponse::from(product)))
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))
}

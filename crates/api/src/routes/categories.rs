//! Category endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use domain::{CartRepository, Catalog, Category};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub description: String,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.value(),
            name: category.name.clone(),
            slug: category.slug.clone(),
            image: category.image.clone(),
            description: category.description.clone(),
        }
    }
}

/// GET /categories — list every category.
#[tracing::instrument(skip(state))]
pub async fn list<R: CartRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Json<Vec<CategoryResponse>> {
    Json(
        state
            .catalog
            .list_categories()
            .iter()
            .map(CategoryResponse::from)
            .collect(),
    )
}

/// GET /categories/:slug — look up a category by slug.
#[tracing::instrument(skip(state))]
pub async fn get<R: CartRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryResponse>, ApiError> {
    state
        .catalog
        .find_category_by_slug(&slug)
        .map(|category| Json(CategoryResponse::from(category)))
        .ok_or_else(|| ApiError::NotFound("Category not found".to_string()))
}

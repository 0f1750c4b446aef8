//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use domain::{CartRepository, Catalog};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub products: usize,
    pub carts: usize,
}

/// GET /health — reports liveness along with catalog and cart counts.
pub async fn check<R: CartRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        products: state.catalog.list_all().len(),
        carts: state.carts.repository().count().await,
    })
}

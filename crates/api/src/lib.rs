//! HTTP API server for the storefront backend.
//!
//! Exposes the product catalog and shopping-cart operations as JSON
//! endpoints, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain::{CartRepository, InMemoryCartRepository, StaticCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// Storefront routes are served both at the root and under `/api`.
pub fn create_app<R: CartRepository + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    let storefront = storefront_routes::<R>();

    Router::new()
        .route("/health", get(routes::health::check::<R>))
        .merge(storefront.clone())
        .nest("/api", storefront)
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

fn storefront_routes<R: CartRepository + 'static>() -> Router<Arc<AppState<R>>> {
    Router::new()
        .route("/products", get(routes::products::list::<R>))
        .route("/products/featured", get(routes::products::featured::<R>))
        .route("/products/{slug}", get(routes::products::get::<R>))
        .route("/categories", get(routes::categories::list::<R>))
        .route("/categories/{slug}", get(routes::categories::get::<R>))
        .route("/cart/{id}", get(routes::cart::get::<R>))
        .route(
            "/cart/{id}/items",
            axum::routing::post(routes::cart::add_item::<R>).delete(routes::cart::clear::<R>),
        )
        .route(
            "/cart/{id}/items/{item_id}",
            axum::routing::put(routes::cart::update_item::<R>)
                .delete(routes::cart::remove_item::<R>),
        )
}

/// Creates the default application state: the given catalog and an empty
/// in-memory cart repository.
pub fn create_default_state(catalog: StaticCatalog) -> Arc<AppState<InMemoryCartRepository>> {
    Arc::new(AppState::in_memory(catalog))
}

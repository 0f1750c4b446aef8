//! Cart endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use common::{CartId, CartItemId, ProductId};
use domain::{AddItem, Cart, CartItem, CartRepository, RemoveItem, UpdateItemQuantity};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Path segment that asks for a fresh cart instead of an existing one.
const NEW_CART: &str = "new";

// -- Request types --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: u64,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub quantity: i64,
}

// -- Response types --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub items: Vec<CartItemResponse>,
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub total: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub id: u64,
    pub product_id: u64,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: String,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.value(),
            product_id: item.product_id.value(),
            name: item.name.clone(),
            price: item.price.to_units_f64(),
            quantity: item.quantity,
            image: item.image.clone(),
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id().value(),
            user_id: cart.user_id().map(|u| u.value()),
            items: cart.items().iter().map(CartItemResponse::from).collect(),
            subtotal: cart.subtotal().to_units_f64(),
            tax: cart.tax().to_units_f64(),
            shipping: cart.shipping().to_units_f64(),
            total: cart.total().to_units_f64(),
        }
    }
}

// -- Handlers --

/// GET /cart/:id — load a cart, or create one when `id` is `new`.
#[tracing::instrument(skip(state))]
pub async fn get<R: CartRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart = if id == NEW_CART {
        state.carts.create_cart(None).await
    } else {
        let cart_id: CartId = id.parse()?;
        state.carts.get_cart(cart_id).await?
    };

    Ok(Json(cart.into()))
}

/// POST /cart/:id/items — add a product to a cart.
#[tracing::instrument(skip(state, payload))]
pub async fn add_item<R: CartRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart_id: CartId = id.parse()?;
    let Json(req) = payload?;

    let cmd = AddItem::new(cart_id, ProductId::new(req.product_id), req.quantity)?;
    let cart = state.carts.add_item(cmd).await?;

    Ok(Json(cart.into()))
}

/// PUT /cart/:id/items/:item_id — set an item's quantity (zero or less removes it).
#[tracing::instrument(skip(state, payload))]
pub async fn update_item<R: CartRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path((id, item_id)): Path<(String, String)>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<CartResponse>, ApiError> {
    let (cart_id, item_id) = parse_item_path(&id, &item_id)?;
    let Json(req) = payload?;

    let cart = state
        .carts
        .update_item_quantity(UpdateItemQuantity::new(cart_id, item_id, req.quantity))
        .await?;

    Ok(Json(cart.into()))
}

/// DELETE /cart/:id/items/:item_id — remove an item.
#[tracing::instrument(skip(state))]
pub async fn remove_item<R: CartRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path((id, item_id)): Path<(String, String)>,
) -> Result<Json<CartResponse>, ApiError> {
    let (cart_id, item_id) = parse_item_path(&id, &item_id)?;

    let cart = state
        .carts
        .remove_item(RemoveItem::new(cart_id, item_id))
        .await?;

    Ok(Json(cart.into()))
}

/// DELETE /cart/:id/items — remove every item.
#[tracing::instrument(skip(state))]
pub async fn clear<R: CartRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<CartResponse>, ApiError> {
    let cart_id: CartId = id.parse()?;
    let cart = state.carts.clear_cart(cart_id).await?;
    Ok(Json(cart.into()))
}

fn parse_item_path(cart_id: &str, item_id: &str) -> Result<(CartId, CartItemId), ApiError> {
    Ok((cart_id.parse()?, item_id.parse()?))
}

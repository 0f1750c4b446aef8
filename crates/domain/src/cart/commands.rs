//! Cart commands.
//!
//! Commands carry already-parsed inputs from the request boundary to the
//! [`CartStore`](super::CartStore).

use common::{CartId, CartItemId, ProductId};

use super::{CartError, Result};

/// Command to add a product to a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItem {
    /// The cart to add the product to.
    pub cart_id: CartId,

    /// The catalog product to add.
    pub product_id: ProductId,

    /// Units to add; always positive.
    pub quantity: u32,
}

impl AddItem {
    /// Creates a new AddItem command.
    ///
    /// Rejects quantities that are not a positive `u32`.
    pub fn new(cart_id: CartId, product_id: ProductId, quantity: i64) -> Result<Self> {
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(CartError::InvalidQuantity { quantity })?;

        Ok(Self {
            cart_id,
            product_id,
            quantity,
        })
    }
}

/// Command to set the quantity of a cart item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateItemQuantity {
    /// The cart containing the item.
    pub cart_id: CartId,

    /// The item to update.
    pub item_id: CartItemId,

    /// New absolute quantity; zero or less removes the item.
    pub quantity: i64,
}

impl UpdateItemQuantity {
    /// Creates a new UpdateItemQuantity command.
    pub fn new(cart_id: CartId, item_id: CartItemId, quantity: i64) -> Self {
        Self {
            cart_id,
            item_id,
            quantity,
        }
    }
}

/// Command to remove an item from a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveItem {
    /// The cart containing the item.
    pub cart_id: CartId,

    /// The item to remove.
    pub item_id: CartItemId,
}

impl RemoveItem {
    /// Creates a new RemoveItem command.
    pub fn new(cart_id: CartId, item_id: CartItemId) -> Self {
        Self { cart_id, item_id }
    }
}

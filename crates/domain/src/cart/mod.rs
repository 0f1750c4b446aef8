//! Shopping carts: aggregate, pricing, storage, and the store service.

mod aggregate;
mod commands;
mod item;
pub mod pricing;
mod repository;
mod store;

pub use aggregate::Cart;
pub use commands::{AddItem, RemoveItem, UpdateItemQuantity};
pub use item::CartItem;
pub use pricing::Totals;
pub use repository::{CartRepository, InMemoryCartRepository};
pub use store::CartStore;

use common::{CartId, CartItemId, ProductId};
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// No cart exists with the given identifier.
    #[error("Cart not found: {0}")]
    CartNotFound(CartId),

    /// The catalog has no product with the given identifier.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The cart has no item with the given identifier.
    #[error("Item {item_id} not found in cart {cart_id}")]
    ItemNotFound {
        cart_id: CartId,
        item_id: CartItemId,
    },

    /// Quantity is not a positive count, or the resulting quantity overflows.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: i64 },
}

/// Convenience type alias for cart results.
pub type Result<T> = std::result::Result<T, CartError>;

//! Shared types for the storefront backend.

mod types;

pub use types::{CartId, CartItemId, CategoryId, ParseIdError, ProductId, UserId};

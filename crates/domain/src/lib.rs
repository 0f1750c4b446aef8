//! Domain layer for the storefront backend.
//!
//! This crate provides:
//! - A read-only product catalog with lookup by identifier and slug
//! - Cart aggregate with totals derived by the pricing calculator
//! - Cart repository abstraction with an in-memory implementation
//! - `CartStore` service applying cart mutations atomically

pub mod cart;
pub mod catalog;
pub mod money;

pub use cart::{
    AddItem, Cart, CartError, CartItem, CartRepository, CartStore, InMemoryCartRepository,
    RemoveItem, Totals, UpdateItemQuantity,
};
pub use catalog::{Catalog, CatalogError, Category, Product, Ratings, StaticCatalog};
pub use money::Money;

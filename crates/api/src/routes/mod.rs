//! HTTP route handlers.

pub mod cart;
pub mod categories;
pub mod health;
pub mod metrics;
pub mod products;

use common::{CartItemId, ProductId};

use crate::catalog::Product;
use crate::money::Money;

/// A line in a cart.
///
/// Name, price, and image are captured from the product when the line is
/// created; later catalog changes do not affect existing lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// Identifier unique within the owning cart.
    pub id: CartItemId,

    /// The product this line refers to.
    pub product_id: ProductId,

    pub name: String,

    /// Unit price at the time the line was created.
    pub price: Money,

    /// Always greater than zero while the item is in a cart.
    pub quantity: u32,

    pub image: String,
}

impl CartItem {
    /// Creates a line for `product`.
    pub fn from_product(id: CartItemId, product: &Product, quantity: u32) -> Self {
        Self {
            id,
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity,
            image: product.primary_image().unwrap_or_default().to_string(),
        }
    }

    /// Returns the price for this line (quantity * price).
    pub fn line_total(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

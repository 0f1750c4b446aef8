//! Cart totals.

use super::CartItem;
use crate::money::Money;

/// Sales tax rate in basis points (8%).
pub const TAX_RATE_BASIS_POINTS: i64 = 800;

/// Shipping charged on any non-empty cart.
pub const FLAT_SHIPPING: Money = Money::from_cents(1000);

/// Derived monetary fields of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub subtotal: Money,
    pub tax: Money,
    pub shipping: Money,
    pub total: Money,
}

/// Computes the totals for a list of cart items.
///
/// Tax is rounded to the nearest cent; the total is the exact sum of
/// subtotal, tax, and shipping.
pub fn calculate(items: &[CartItem]) -> Totals {
    let subtotal: Money = items.iter().map(CartItem::line_total).sum();
    let tax = subtotal.percent_of(TAX_RATE_BASIS_POINTS);
    let shipping = if items.is_empty() {
        Money::zero()
    } else {
        FLAT_SHIPPING
    };

    Totals {
        subtotal,
        tax,
        shipping,
        total: subtotal + tax + shipping,
    }
}

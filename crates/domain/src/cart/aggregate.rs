//! Cart aggregate.

use common::{CartId, CartItemId, UserId};

use super::{CartError, CartItem, Result, Totals, pricing};
use crate::catalog::Product;
use crate::money::Money;

/// A shopping cart.
///
/// Items can only be changed through the mutation methods below, and each
/// of them recomputes the totals before returning, so `totals()` always
/// matches `pricing::calculate(items())`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    id: CartId,

    user_id: Option<UserId>,

    /// Lines in insertion order.
    items: Vec<CartItem>,

    totals: Totals,

    /// Next line identifier; never reused, even after removals.
    next_item_id: CartItemId,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new(id: CartId, user_id: Option<UserId>) -> Self {
        Self {
            id,
            user_id,
            items: Vec::new(),
            totals: Totals::default(),
            next_item_id: CartItemId::first(),
        }
    }
}

// Query methods
impl Cart {
    pub fn id(&self) -> CartId {
        self.id
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns an item by its identifier.
    pub fn get_item(&self, item_id: CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Returns the number of lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn subtotal(&self) -> Money {
        self.totals.subtotal
    }

    pub fn tax(&self) -> Money {
        self.totals.tax
    }

    pub fn shipping(&self) -> Money {
        self.totals.shipping
    }

    pub fn total(&self) -> Money {
        self.totals.total
    }
}

// Mutation methods
impl Cart {
    /// Adds `quantity` units of `product`.
    ///
    /// If a line for the product already exists its quantity is increased,
    /// otherwise a new line is appended. Returns the affected line.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> Result<&CartItem> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity { quantity: 0 });
        }

        let index = match self.items.iter().position(|i| i.product_id == product.id) {
            Some(index) => {
                let item = &mut self.items[index];
                let current = item.quantity;
                item.quantity = current.checked_add(quantity).ok_or(CartError::InvalidQuantity {
                    quantity: i64::from(current) + i64::from(quantity),
                })?;
                index
            }
            None => {
                let item_id = self.next_item_id;
                self.next_item_id = item_id.next();
                self.items.push(CartItem::from_product(item_id, product, quantity));
                self.items.len() - 1
            }
        };

        self.recalculate();
        Ok(&self.items[index])
    }

    /// Sets the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line.
    pub fn set_item_quantity(&mut self, item_id: CartItemId, quantity: i64) -> Result<()> {
        let index = self.position_of(item_id)?;

        if quantity <= 0 {
            self.items.remove(index);
        } else {
            self.items[index].quantity =
                u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity { quantity })?;
        }

        self.recalculate();
        Ok(())
    }

    /// Removes a line and returns it.
    pub fn remove_item(&mut self, item_id: CartItemId) -> Result<CartItem> {
        let index = self.position_of(item_id)?;
        let removed = self.items.remove(index);
        self.recalculate();
        Ok(removed)
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.items.clear();
        self.recalculate();
    }

    fn position_of(&self, item_id: CartItemId) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or(CartError::ItemNotFound {
                cart_id: self.id,
                item_id,
            })
    }

    fn recalculate(&mut self) {
        self.totals = pricing::calculate(&self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::ProductId;

    fn product(id: u64, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            slug: format!("product-{id}"),
            description: String::new(),
            price: Money::from_cents(price_cents),
            compare_at_price: None,
            images: vec![
                format!("https://img.test/{id}-a.jpg"),
                format!("https://img.test/{id}-b.jpg"),
            ],
            category: "Test".to_string(),
            tags: vec![],
            stock: 10,
            ratings: None,
            is_featured: false,
            is_new: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn assert_totals_consistent(cart: &Cart) {
        assert_eq!(cart.totals(), pricing::calculate(cart.items()));
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new(CartId::new(1), None);
        assert!(cart.is_empty());
        assert_eq!(cart.totals(), Totals::default());
        assert_eq!(cart.user_id(), None);
    }

    #[test]
    fn add_product_captures_details() {
        let mut cart = Cart::new(CartId::new(1), Some(UserId::new(9)));
        let p = product(1, 8999);

        let item = cart.add_product(&p, 2).unwrap().clone();

        assert_eq!(item.id, CartItemId::new(1));
        assert_eq!(item.product_id, p.id);
        assert_eq!(item.name, "Product 1");
        assert_eq!(item.price.cents(), 8999);
        assert_eq!(item.image, "https://img.test/1-a.jpg");
        assert_eq!(cart.subtotal().cents(), 17998);
        assert_eq!(cart.shipping().cents(), 1000);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn totals_are_derived_from_lines() {
        let mut cart = Cart::new(CartId::new(1), None);
        let p = product(1, 1000);

        cart.add_product(&p, 2).unwrap();

        let totals = cart.totals();
        assert_eq!(totals.subtotal.cents(), 2000);
        assert_eq!(totals.tax.cents(), 160);
        assert_eq!(totals.shipping.cents(), 1000);
        assert_eq!(totals.total.cents(), 3160);
        assert_totals_consistent(&cart);

        cart.clear();
        assert_eq!(cart.totals(), Totals::default());

        let next = cart.add_product(&p, 1).unwrap().id;
        assert_eq!(next, CartItemId::new(2));
        assert_totals_consistent(&cart);
    }

    #[test]
    fn add_same_product_merges_lines() {
        let mut cart = Cart::new(CartId::new(1), None);
        let p = product(1, 1000);

        cart.add_product(&p, 2).unwrap();
        cart.add_product(&p, 3).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
        assert_eq!(cart.subtotal().cents(), 5000);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn add_zero_quantity_fails() {
        let mut cart = Cart::new(CartId::new(1), None);
        let result = cart.add_product(&product(1, 1000), 0);
        assert_eq!(result.unwrap_err(), CartError::InvalidQuantity { quantity: 0 });
        assert!(cart.is_empty());
    }

    #[test]
    fn add_overflowing_quantity_leaves_cart_unchanged() {
        let mut cart = Cart::new(CartId::new(1), None);
        let p = product(1, 1);
        cart.add_product(&p, u32::MAX).unwrap();

        let before = cart.clone();
        assert!(matches!(
            cart.add_product(&p, 1),
            Err(CartError::InvalidQuantity { .. })
        ));
        assert_eq!(cart, before);
    }

    #[test]
    fn item_ids_are_not_reused_after_removal() {
        let mut cart = Cart::new(CartId::new(1), None);
        let first = cart.add_product(&product(1, 100), 1).unwrap().id;
        let second = cart.add_product(&product(2, 100), 1).unwrap().id;

        cart.remove_item(first).unwrap();
        let third = cart.add_product(&product(3, 100), 1).unwrap().id;

        assert_eq!(first, CartItemId::new(1));
        assert_eq!(second, CartItemId::new(2));
        assert_eq!(third, CartItemId::new(3));
        assert!(cart.get_item(second).is_some());
    }

    #[test]
    fn set_quantity_is_absolute() {
        let mut cart = Cart::new(CartId::new(1), None);
        let id = cart.add_product(&product(1, 250), 4).unwrap().id;

        cart.set_item_quantity(id, 2).unwrap();

        assert_eq!(cart.get_item(id).unwrap().quantity, 2);
        assert_eq!(cart.subtotal().cents(), 500);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn set_quantity_non_positive_removes() {
        let mut cart = Cart::new(CartId::new(1), None);
        let a = cart.add_product(&product(1, 250), 1).unwrap().id;
        let b = cart.add_product(&product(2, 250), 1).unwrap().id;

        cart.set_item_quantity(a, 0).unwrap();
        assert!(cart.get_item(a).is_none());
        assert_eq!(cart.shipping().cents(), 1000);

        cart.set_item_quantity(b, -3).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.totals(), Totals::default());
    }

    #[test]
    fn set_quantity_unknown_item_fails() {
        let mut cart = Cart::new(CartId::new(4), None);
        let err = cart.set_item_quantity(CartItemId::new(1), 2).unwrap_err();
        assert_eq!(
            err,
            CartError::ItemNotFound {
                cart_id: CartId::new(4),
                item_id: CartItemId::new(1),
            }
        );
    }

    #[test]
    fn remove_last_item_zeroes_shipping() {
        let mut cart = Cart::new(CartId::new(1), None);
        let id = cart.add_product(&product(1, 999), 3).unwrap().id;

        let removed = cart.remove_item(id).unwrap();

        assert_eq!(removed.quantity, 3);
        assert!(cart.is_empty());
        assert!(cart.shipping().is_zero());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn clear_removes_everything() {
        let mut cart = Cart::new(CartId::new(1), None);
        cart.add_product(&product(1, 999), 3).unwrap();
        cart.add_product(&product(2, 1999), 1).unwrap();

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.totals(), Totals::default());
    }

    #[test]
    fn total_quantity_sums_lines() {
        let mut cart = Cart::new(CartId::new(1), None);
        cart.add_product(&product(1, 1), 3).unwrap();
        cart.add_product(&product(2, 1), 4).unwrap();
        assert_eq!(cart.total_quantity(), 7);
    }
}

//! Cart store service.

use std::sync::Arc;

use common::{CartId, UserId};

use super::{AddItem, Cart, CartError, CartRepository, RemoveItem, Result, UpdateItemQuantity};
use crate::catalog::Catalog;

/// Owner of all live carts.
///
/// Resolves products through the catalog and applies every mutation through
/// [`CartRepository::update`], so each operation is atomic with respect to
/// other operations on the same cart and always returns a snapshot with
/// freshly computed totals.
pub struct CartStore<R: CartRepository, C: Catalog> {
    repository: R,
    catalog: Arc<C>,
}

impl<R: CartRepository, C: Catalog> CartStore<R, C> {
    /// Creates a new cart store.
    pub fn new(repository: R, catalog: Arc<C>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Creates an empty cart, optionally owned by a user.
    #[tracing::instrument(skip(self))]
    pub async fn create_cart(&self, user_id: Option<UserId>) -> Cart {
        let cart = self.repository.create(user_id).await;
        metrics::counter!("carts_created_total").increment(1);
        tracing::debug!(cart_id = %cart.id(), "cart created");
        cart
    }

    /// Returns the current snapshot of a cart.
    #[tracing::instrument(skip(self))]
    pub async fn get_cart(&self, cart_id: CartId) -> Result<Cart> {
        self.repository
            .get(cart_id)
            .await
            .ok_or(CartError::CartNotFound(cart_id))
    }

    /// Adds a product to a cart, merging with an existing line for the same product.
    #[tracing::instrument(skip(self))]
    pub async fn add_item(&self, cmd: AddItem) -> Result<Cart> {
        let product = self
            .catalog
            .find_by_id(cmd.product_id)
            .cloned()
            .ok_or(CartError::ProductNotFound(cmd.product_id))?;
        let quantity = cmd.quantity;

        let cart = self
            .repository
            .update(cmd.cart_id, move |cart| {
                cart.add_product(&product, quantity).map(|_| ())
            })
            .await?;

        metrics::counter!("cart_items_added_total").increment(1);
        tracing::debug!(cart_id = %cart.id(), total = %cart.total(), "item added");
        Ok(cart)
    }

    /// Sets an item's quantity; zero or less removes the item.
    #[tracing::instrument(skip(self))]
    pub async fn update_item_quantity(&self, cmd: UpdateItemQuantity) -> Result<Cart> {
        let UpdateItemQuantity {
            cart_id,
            item_id,
            quantity,
        } = cmd;

        let cart = self
            .repository
            .update(cart_id, move |cart| cart.set_item_quantity(item_id, quantity))
            .await?;

        metrics::counter!("cart_items_updated_total").increment(1);
        tracing::debug!(cart_id = %cart.id(), total = %cart.total(), "item quantity updated");
        Ok(cart)
    }

    /// Removes an item from a cart.
    #[tracing::instrument(skip(self))]
    pub async fn remove_item(&self, cmd: RemoveItem) -> Result<Cart> {
        let item_id = cmd.item_id;

        let cart = self
            .repository
            .update(cmd.cart_id, move |cart| cart.remove_item(item_id).map(|_| ()))
            .await?;

        metrics::counter!("cart_items_removed_total").increment(1);
        tracing::debug!(cart_id = %cart.id(), total = %cart.total(), "item removed");
        Ok(cart)
    }

    /// Removes every item from a cart.
    #[tracing::instrument(skip(self))]
    pub async fn clear_cart(&self, cart_id: CartId) -> Result<Cart> {
        let cart = self
            .repository
            .update(cart_id, |cart| {
                cart.clear();
                Ok(())
            })
            .await?;

        metrics::counter!("carts_cleared_total").increment(1);
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::InMemoryCartRepository;
    use crate::catalog::StaticCatalog;
    use common::{CartItemId, ProductId};

    fn create_store() -> CartStore<InMemoryCartRepository, StaticCatalog> {
        let catalog = StaticCatalog::seeded().unwrap();
        CartStore::new(InMemoryCartRepository::new(), Arc::new(catalog))
    }

    #[tokio::test]
    async fn test_create_cart() {
        let store = create_store();

        let cart = store.create_cart(None).await;

        assert_eq!(cart.id(), CartId::new(1));
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[tokio::test]
    async fn test_get_cart() {
        let store = create_store();

        let err = store.get_cart(CartId::new(1)).await.unwrap_err();
        assert_eq!(err, CartError::CartNotFound(CartId::new(1)));

        let cart = store.create_cart(Some(UserId::new(1))).await;
        let loaded = store.get_cart(cart.id()).await.unwrap();
        assert_eq!(loaded, cart);
    }

    #[tokio::test]
    async fn test_add_item() {
        let store = create_store();
        let cart = store.create_cart(None).await;

        let cmd = AddItem::new(cart.id(), ProductId::new(1), 2).unwrap();
        let cart = store.add_item(cmd).await.unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].name, "Minimalist Desk Lamp");
        assert_eq!(cart.subtotal().cents(), 17998);
        assert_eq!(cart.shipping().cents(), 1000);
    }

    #[tokio::test]
    async fn test_add_item_unknown_product() {
        let store = create_store();
        let cart = store.create_cart(None).await;

        let cmd = AddItem::new(cart.id(), ProductId::new(404), 1).unwrap();
        let err = store.add_item(cmd).await.unwrap_err();

        assert_eq!(err, CartError::ProductNotFound(ProductId::new(404)));
    }

    #[tokio::test]
    async fn test_add_item_checks_product_before_cart() {
        let store = create_store();

        let cmd = AddItem::new(CartId::new(9), ProductId::new(404), 1).unwrap();
        let err = store.add_item(cmd).await.unwrap_err();
        assert_eq!(err, CartError::ProductNotFound(ProductId::new(404)));

        let cmd = AddItem::new(CartId::new(9), ProductId::new(1), 1).unwrap();
        let err = store.add_item(cmd).await.unwrap_err();
        assert_eq!(err, CartError::CartNotFound(CartId::new(9)));
    }

    #[tokio::test]
    async fn test_update_item_quantity() {
        let store = create_store();
        let cart = store.create_cart(None).await;
        let cart = store
            .add_item(AddItem::new(cart.id(), ProductId::new(3), 1).unwrap())
            .await
            .unwrap();
        let item_id = cart.items()[0].id;

        let cart = store
            .update_item_quantity(UpdateItemQuantity::new(cart.id(), item_id, 4))
            .await
            .unwrap();
        assert_eq!(cart.get_item(item_id).unwrap().quantity, 4);
        assert_eq!(cart.subtotal().cents(), 4 * 12999);

        let cart = store
            .update_item_quantity(UpdateItemQuantity::new(cart.id(), item_id, 0))
            .await
            .unwrap();
        assert!(cart.is_empty());
        assert!(cart.shipping().is_zero());
    }

    #[tokio::test]
    async fn test_update_unknown_item() {
        let store = create_store();
        let cart = store.create_cart(None).await;

        let err = store
            .update_item_quantity(UpdateItemQuantity::new(cart.id(), CartItemId::new(5), 1))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CartError::ItemNotFound {
                cart_id: cart.id(),
                item_id: CartItemId::new(5),
            }
        );
    }

    #[tokio::test]
    async fn test_remove_item() {
        let store = create_store();
        let cart = store.create_cart(None).await;
        let cart = store
            .add_item(AddItem::new(cart.id(), ProductId::new(2), 1).unwrap())
            .await
            .unwrap();
        let item_id = cart.items()[0].id;

        let cart = store
            .remove_item(RemoveItem::new(cart.id(), item_id))
            .await
            .unwrap();
        assert!(cart.is_empty());

        let err = store
            .remove_item(RemoveItem::new(cart.id(), item_id))
            .await
            .unwrap_err();
        assert!(matches!(err, CartError::ItemNotFound { .. }));
    }

    #[tokio::test]
    async fn test_clear_cart() {
        let store = create_store();
        let cart = store.create_cart(None).await;
        for product in 1..=3 {
            store
                .add_item(AddItem::new(cart.id(), ProductId::new(product), 1).unwrap())
                .await
                .unwrap();
        }

        let cart = store.clear_cart(cart.id()).await.unwrap();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());

        let err = store.clear_cart(CartId::new(99)).await.unwrap_err();
        assert_eq!(err, CartError::CartNotFound(CartId::new(99)));
    }
}

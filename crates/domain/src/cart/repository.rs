//! Cart storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::{CartId, UserId};
use tokio::sync::RwLock;

use super::{Cart, CartError, Result};

/// Storage for carts.
///
/// Implementations own identifier allocation and must run each `update`
/// closure with exclusive access to the cart, so concurrent updates of the
/// same cart never interleave. All implementations must be thread-safe.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Allocates the next cart identifier and stores an empty cart under it.
    async fn create(&self, user_id: Option<UserId>) -> Cart;

    /// Returns a snapshot of the cart, or `None` if it does not exist.
    async fn get(&self, id: CartId) -> Option<Cart>;

    /// Applies `mutate` to the stored cart and returns the updated snapshot.
    ///
    /// If `mutate` fails the stored cart is left unchanged.
    async fn update<F>(&self, id: CartId, mutate: F) -> Result<Cart>
    where
        F: FnOnce(&mut Cart) -> Result<()> + Send;

    /// Returns the number of stored carts.
    async fn count(&self) -> usize;
}

struct InMemoryState {
    carts: HashMap<CartId, Cart>,
    next_id: CartId,
}

impl Default for InMemoryState {
    fn default() -> Self {
        Self {
            carts: HashMap::new(),
            next_id: CartId::first(),
        }
    }
}

/// In-memory cart repository.
///
/// Carts and the identifier counter live behind a single read/write lock:
/// reads share it, creation and updates hold it exclusively for the whole
/// read-modify-write. Carts are lost when the process exits.
#[derive(Clone, Default)]
pub struct InMemoryCartRepository {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryCartRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn create(&self, user_id: Option<UserId>) -> Cart {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id = id.next();

        let cart = Cart::new(id, user_id);
        state.carts.insert(id, cart.clone());
        cart
    }

    async fn get(&self, id: CartId) -> Option<Cart> {
        self.state.read().await.carts.get(&id).cloned()
    }

    async fn update<F>(&self, id: CartId, mutate: F) -> Result<Cart>
    where
        F: FnOnce(&mut Cart) -> Result<()> + Send,
    {
        let mut state = self.state.write().await;

        let stored = state
            .carts
            .get_mut(&id)
            .ok_or(CartError::CartNotFound(id))?;

        // Work on a copy so a failed mutation cannot leave partial changes.
        let mut updated = stored.clone();
        mutate(&mut updated)?;
        *stored = updated.clone();

        Ok(updated)
    }

    async fn count(&self) -> usize {
        self.state.read().await.carts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Totals;

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryCartRepository::new();

        let first = repo.create(None).await;
        let second = repo.create(Some(UserId::new(7))).await;

        assert_eq!(first.id(), CartId::new(1));
        assert_eq!(second.id(), CartId::new(2));
        assert_eq!(second.user_id(), Some(UserId::new(7)));
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let repo = InMemoryCartRepository::new();
        assert!(repo.get(CartId::new(1)).await.is_none());
    }

    #[tokio::test]
    async fn update_missing_cart_fails() {
        let repo = InMemoryCartRepository::new();
        let result = repo.update(CartId::new(3), |_| Ok(())).await;
        assert_eq!(result.unwrap_err(), CartError::CartNotFound(CartId::new(3)));
    }

    #[tokio::test]
    async fn failed_update_is_discarded() {
        let repo = InMemoryCartRepository::new();
        let cart = repo.create(None).await;

        let result = repo
            .update(cart.id(), |c| {
                c.clear();
                Err(CartError::InvalidQuantity { quantity: 0 })
            })
            .await;

        assert!(result.is_err());
        assert_eq!(repo.get(cart.id()).await.unwrap(), cart);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let repo = InMemoryCartRepository::new();
        let other = repo.clone();

        let cart = repo.create(None).await;
        let loaded = other.get(cart.id()).await.unwrap();

        assert_eq!(loaded.totals(), Totals::default());
    }
}

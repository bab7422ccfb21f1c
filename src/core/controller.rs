//! # Controller
//!
//! Orchestrates remote store calls and feeds the results back to the
//! reducer as [`Action`]s over an mpsc channel drained by the event loop.
//! Exposes the four user-facing operations: `init`, `add_to_cart`,
//! `remove_from_cart`, `checkout`.
//!
//! Cart-mutating operations run behind a per-cart gate: two rapid adds
//! queue instead of both reading the same pre-update cart snapshot and
//! both deciding to create.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use log::{info, warn};
use tokio::task::JoinHandle;

use crate::core::action::Action;
use crate::store::{CartItem, RemoteStore, StoreError};

pub struct Controller {
    store: Arc<dyn RemoteStore>,
    tx: Sender<Action>,
    cart_gate: Arc<tokio::sync::Mutex<()>>,
}

fn send(tx: &Sender<Action>, action: Action) {
    if tx.send(action).is_err() {
        warn!("Failed to send action: receiver dropped");
    }
}

impl Controller {
    pub fn new(store: Arc<dyn RemoteStore>, tx: Sender<Action>) -> Self {
        Self {
            store,
            tx,
            cart_gate: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Fetches inventory and cart independently; both are in flight at
    /// once and each populates state on its own completion.
    pub fn init(&self) -> Vec<JoinHandle<()>> {
        info!("Fetching inventory and cart");

        let store = self.store.clone();
        let tx = self.tx.clone();
        let inventory = tokio::spawn(async move {
            match store.get_inventory().await {
                Ok(rows) => send(&tx, Action::InventoryLoaded(rows)),
                Err(e) => {
                    warn!("Inventory fetch failed: {e}");
                    send(&tx, Action::StoreFailed(e.to_string()));
                }
            }
        });

        let store = self.store.clone();
        let tx = self.tx.clone();
        let cart = tokio::spawn(async move {
            match store.get_cart().await {
                Ok(rows) => send(&tx, Action::CartLoaded(rows)),
                Err(e) => {
                    warn!("Cart fetch failed: {e}");
                    send(&tx, Action::StoreFailed(e.to_string()));
                }
            }
        });

        vec![inventory, cart]
    }

    /// Adds `item` to the remote cart (merge by content label or create),
    /// then replaces the local cart with a fresh remote fetch.
    pub fn add_to_cart(&self, item: CartItem) -> JoinHandle<()> {
        info!("Add to cart: '{}' x {}", item.content, item.quantity);
        let store = self.store.clone();
        let tx = self.tx.clone();
        let gate = self.cart_gate.clone();
        tokio::spawn(async move {
            let _gate = gate.lock().await;
            let outcome: Result<Vec<CartItem>, StoreError> = async {
                store.add_to_cart(&item).await?;
                store.get_cart().await
            }
            .await;
            match outcome {
                Ok(cart) => send(&tx, Action::CartLoaded(cart)),
                Err(e) => {
                    warn!("Add to cart failed: {e}");
                    send(&tx, Action::StoreFailed(e.to_string()));
                }
            }
        })
    }

    /// Deletes the remote entry, then drops it locally. On failure the
    /// local cart is left as it was and the error is surfaced.
    pub fn remove_from_cart(&self, id: u64) -> JoinHandle<()> {
        info!("Remove from cart: entry {id}");
        let store = self.store.clone();
        let tx = self.tx.clone();
        let gate = self.cart_gate.clone();
        tokio::spawn(async move {
            let _gate = gate.lock().await;
            match store.delete_from_cart(id).await {
                Ok(()) => send(&tx, Action::CartEntryRemoved(id)),
                Err(e) => {
                    warn!("Remove from cart failed: {e}");
                    send(&tx, Action::StoreFailed(e.to_string()));
                }
            }
        })
    }

    /// Empties the remote cart, clears the local one, then confirms
    /// against a fresh remote fetch.
    pub fn checkout(&self) -> JoinHandle<()> {
        info!("Checkout");
        let store = self.store.clone();
        let tx = self.tx.clone();
        let gate = self.cart_gate.clone();
        tokio::spawn(async move {
            let _gate = gate.lock().await;
            match store.checkout().await {
                Ok(()) => {
                    send(&tx, Action::CartCleared);
                    match store.get_cart().await {
                        Ok(cart) => send(&tx, Action::CartLoaded(cart)),
                        Err(e) => {
                            warn!("Cart refresh failed: {e}");
                            send(&tx, Action::StoreFailed(e.to_string()));
                        }
                    }
                }
                Err(e) => {
                    warn!("Checkout failed: {e}");
                    send(&tx, Action::StoreFailed(e.to_string()));
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    use crate::test_support::{FailingStore, MemoryStore, cart_item, inventory_row};

    fn controller_over(
        store: Arc<dyn RemoteStore>,
    ) -> (Controller, mpsc::Receiver<Action>) {
        let (tx, rx) = mpsc::channel();
        (Controller::new(store, tx), rx)
    }

    fn drain(rx: &mpsc::Receiver<Action>) -> Vec<Action> {
        rx.try_iter().collect()
    }

    #[tokio::test]
    async fn test_init_populates_both_lists() {
        let store = Arc::new(MemoryStore::new(
            vec![inventory_row(1, "apple", 0)],
            vec![cart_item(2, "banana", 1)],
        ));
        let (controller, rx) = controller_over(store);

        for handle in controller.init() {
            handle.await.unwrap();
        }

        let actions = drain(&rx);
        assert_eq!(actions.len(), 2);
        assert!(
            actions.contains(&Action::InventoryLoaded(vec![inventory_row(1, "apple", 0)]))
        );
        assert!(actions.contains(&Action::CartLoaded(vec![cart_item(2, "banana", 1)])));
    }

    #[tokio::test]
    async fn test_add_into_empty_cart_creates_entry_at_given_quantity() {
        let store = Arc::new(MemoryStore::new(vec![inventory_row(1, "apple", 0)], vec![]));
        let (controller, rx) = controller_over(store.clone());

        controller
            .add_to_cart(cart_item(1, "apple", 2))
            .await
            .unwrap();

        assert_eq!(store.cart_snapshot(), vec![cart_item(1, "apple", 2)]);
        assert_eq!(
            drain(&rx),
            vec![Action::CartLoaded(vec![cart_item(1, "apple", 2)])]
        );
    }

    #[tokio::test]
    async fn test_add_with_existing_content_sums_without_duplicating() {
        let store = Arc::new(MemoryStore::new(vec![], vec![cart_item(1, "apple", 2)]));
        let (controller, rx) = controller_over(store.clone());

        controller
            .add_to_cart(cart_item(1, "apple", 3))
            .await
            .unwrap();

        assert_eq!(store.cart_snapshot(), vec![cart_item(1, "apple", 5)]);
        assert_eq!(
            drain(&rx),
            vec![Action::CartLoaded(vec![cart_item(1, "apple", 5)])]
        );
    }

    #[tokio::test]
    async fn test_concurrent_adds_of_same_content_queue_behind_the_gate() {
        let store = Arc::new(MemoryStore::new(vec![], vec![]));
        let (controller, rx) = controller_over(store.clone());

        let first = controller.add_to_cart(cart_item(1, "apple", 2));
        let second = controller.add_to_cart(cart_item(1, "apple", 3));
        first.await.unwrap();
        second.await.unwrap();

        assert_eq!(store.cart_snapshot(), vec![cart_item(1, "apple", 5)]);
        let actions = drain(&rx);
        assert_eq!(
            actions.last(),
            Some(&Action::CartLoaded(vec![cart_item(1, "apple", 5)]))
        );
    }

    #[tokio::test]
    async fn test_remove_deletes_exactly_one_entry() {
        let store = Arc::new(MemoryStore::new(
            vec![],
            vec![cart_item(1, "apple", 2), cart_item(2, "banana", 1)],
        ));
        let (controller, rx) = controller_over(store.clone());

        controller.remove_from_cart(1).await.unwrap();

        assert_eq!(store.cart_snapshot(), vec![cart_item(2, "banana", 1)]);
        assert_eq!(drain(&rx), vec![Action::CartEntryRemoved(1)]);
    }

    #[tokio::test]
    async fn test_remove_of_absent_id_still_reports_removal() {
        let store = Arc::new(MemoryStore::new(vec![], vec![cart_item(2, "banana", 1)]));
        let (controller, rx) = controller_over(store.clone());

        controller.remove_from_cart(9).await.unwrap();

        assert_eq!(store.cart_snapshot(), vec![cart_item(2, "banana", 1)]);
        assert_eq!(drain(&rx), vec![Action::CartEntryRemoved(9)]);
    }

    #[tokio::test]
    async fn test_checkout_empties_remote_then_confirms() {
        let store = Arc::new(MemoryStore::new(
            vec![],
            vec![
                cart_item(1, "apple", 2),
                cart_item(2, "banana", 1),
                cart_item(3, "kiwi", 4),
            ],
        ));
        let (controller, rx) = controller_over(store.clone());

        controller.checkout().await.unwrap();

        assert!(store.cart_snapshot().is_empty());
        assert_eq!(
            drain(&rx),
            vec![Action::CartCleared, Action::CartLoaded(vec![])]
        );
    }

    #[tokio::test]
    async fn test_failing_store_surfaces_errors() {
        let (controller, rx) = controller_over(Arc::new(FailingStore));

        controller
            .add_to_cart(cart_item(1, "apple", 2))
            .await
            .unwrap();
        controller.remove_from_cart(1).await.unwrap();
        controller.checkout().await.unwrap();

        let actions = drain(&rx);
        assert_eq!(actions.len(), 3);
        for action in actions {
            assert!(matches!(action, Action::StoreFailed(_)));
        }
    }
}

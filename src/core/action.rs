//! # Actions
//!
//! Everything that can happen in Trolley becomes an `Action`.
//! User presses add? That's `Action::SubmitAdd`.
//! The store answers? That's `Action::CartLoaded(rows)`.
//!
//! The `update()` function takes the current state and an action and
//! mutates the state in place. No I/O happens here; when an action
//! requires a store call, `update()` returns an `Effect` and the
//! composition root hands it to the controller.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: apply an action, assert on the state.

use log::info;

use crate::core::state::App;
use crate::store::{CartItem, InventoryItem};

#[derive(Debug, PartialEq)]
pub enum Action {
    /// Remote inventory arrived; replace the local list wholesale.
    InventoryLoaded(Vec<InventoryItem>),
    /// Remote cart arrived; replace the local list wholesale.
    CartLoaded(Vec<CartItem>),
    /// Merge an item into the local cart by id: sum quantities on a match,
    /// append otherwise.
    MergeCartItem(CartItem),
    /// A remote delete succeeded; drop the entry locally. A no-op if the
    /// id is already absent.
    CartEntryRemoved(u64),
    /// The remote cart was emptied; reset the local one.
    CartCleared,
    /// Stepper on the inventory row at this index.
    IncrementQuantity(usize),
    /// Stepper on the inventory row at this index, floored at 0.
    DecrementQuantity(usize),
    /// User asked to add a copy of an inventory row to the cart.
    SubmitAdd(CartItem),
    /// User asked to remove the cart entry with this id.
    SubmitRemove(u64),
    /// User asked to checkout.
    SubmitCheckout,
    /// A store operation failed.
    StoreFailed(String),
    Quit,
}

/// I/O the composition root must launch after an action was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    AddToCart(CartItem),
    RemoveFromCart(u64),
    Checkout,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::InventoryLoaded(rows) => {
            info!("Inventory loaded: {} rows", rows.len());
            app.inventory = rows;
            app.is_loading = false;
            app.status_message = String::from("Ready");
            Effect::None
        }
        Action::CartLoaded(rows) => {
            info!("Cart loaded: {} entries", rows.len());
            app.cart = rows;
            app.is_loading = false;
            app.status_message = String::from("Ready");
            app.error = None;
            Effect::None
        }
        Action::MergeCartItem(item) => {
            match app.cart.iter_mut().find(|row| row.id == item.id) {
                Some(existing) => existing.quantity += item.quantity,
                None => app.cart.push(item),
            }
            Effect::None
        }
        Action::CartEntryRemoved(id) => {
            app.cart.retain(|row| row.id != id);
            app.is_loading = false;
            app.status_message = String::from("Entry removed");
            Effect::None
        }
        Action::CartCleared => {
            app.cart.clear();
            app.status_message = String::from("Checkout complete");
            Effect::None
        }
        Action::IncrementQuantity(index) => {
            if let Some(row) = app.inventory.get_mut(index) {
                row.quantity += 1;
            }
            Effect::None
        }
        Action::DecrementQuantity(index) => {
            if let Some(row) = app.inventory.get_mut(index) {
                row.quantity = row.quantity.saturating_sub(1);
            }
            Effect::None
        }
        Action::SubmitAdd(item) => {
            if item.quantity == 0 {
                app.status_message = String::from("Pick a quantity first");
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = format!("Adding {} x {}...", item.content, item.quantity);
            Effect::AddToCart(item)
        }
        Action::SubmitRemove(id) => {
            app.is_loading = true;
            app.status_message = String::from("Removing entry...");
            Effect::RemoveFromCart(id)
        }
        Action::SubmitCheckout => {
            app.is_loading = true;
            app.status_message = String::from("Checking out...");
            Effect::Checkout
        }
        Action::StoreFailed(message) => {
            app.is_loading = false;
            app.status_message = format!("Store error: {message}");
            app.error = Some(message);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new("http://localhost:3000".to_string())
    }

    fn cart_item(id: u64, content: &str, quantity: u32) -> CartItem {
        CartItem {
            id,
            content: content.to_string(),
            quantity,
        }
    }

    fn inventory_row(id: u64, content: &str, quantity: u32) -> InventoryItem {
        InventoryItem {
            id,
            content: content.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_inventory_loaded_replaces_wholesale() {
        let mut app = app();
        app.inventory = vec![inventory_row(9, "stale", 5)];
        let effect = update(
            &mut app,
            Action::InventoryLoaded(vec![inventory_row(1, "apple", 0)]),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.inventory, vec![inventory_row(1, "apple", 0)]);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_cart_loaded_replaces_wholesale_and_clears_error() {
        let mut app = app();
        app.error = Some("boom".to_string());
        update(&mut app, Action::CartLoaded(vec![cart_item(1, "apple", 2)]));
        assert_eq!(app.cart, vec![cart_item(1, "apple", 2)]);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_merge_sums_quantity_on_existing_id() {
        let mut app = app();
        app.cart = vec![cart_item(1, "apple", 2)];
        update(&mut app, Action::MergeCartItem(cart_item(1, "apple", 3)));
        assert_eq!(app.cart, vec![cart_item(1, "apple", 5)]);
    }

    #[test]
    fn test_merge_appends_exactly_one_entry_on_new_id() {
        let mut app = app();
        app.cart = vec![cart_item(1, "apple", 2)];
        update(&mut app, Action::MergeCartItem(cart_item(2, "banana", 1)));
        assert_eq!(
            app.cart,
            vec![cart_item(1, "apple", 2), cart_item(2, "banana", 1)]
        );
    }

    #[test]
    fn test_entry_removed_drops_only_the_matching_id() {
        let mut app = app();
        app.cart = vec![cart_item(1, "apple", 2), cart_item(2, "banana", 1)];
        update(&mut app, Action::CartEntryRemoved(1));
        assert_eq!(app.cart, vec![cart_item(2, "banana", 1)]);
    }

    #[test]
    fn test_entry_removed_twice_is_idempotent() {
        let mut app = app();
        app.cart = vec![cart_item(1, "apple", 2), cart_item(2, "banana", 1)];
        update(&mut app, Action::CartEntryRemoved(1));
        update(&mut app, Action::CartEntryRemoved(1));
        assert_eq!(app.cart, vec![cart_item(2, "banana", 1)]);
    }

    #[test]
    fn test_cart_cleared_empties() {
        let mut app = app();
        app.cart = vec![cart_item(1, "apple", 2), cart_item(2, "banana", 1)];
        update(&mut app, Action::CartCleared);
        assert!(app.cart.is_empty());
    }

    #[test]
    fn test_stepper_increments_selected_row() {
        let mut app = app();
        app.inventory = vec![inventory_row(1, "apple", 0)];
        update(&mut app, Action::IncrementQuantity(0));
        update(&mut app, Action::IncrementQuantity(0));
        assert_eq!(app.inventory[0].quantity, 2);
    }

    #[test]
    fn test_stepper_floors_at_zero() {
        let mut app = app();
        app.inventory = vec![inventory_row(1, "apple", 1)];
        update(&mut app, Action::DecrementQuantity(0));
        update(&mut app, Action::DecrementQuantity(0));
        assert_eq!(app.inventory[0].quantity, 0);
    }

    #[test]
    fn test_stepper_ignores_out_of_range_index() {
        let mut app = app();
        app.inventory = vec![inventory_row(1, "apple", 0)];
        update(&mut app, Action::IncrementQuantity(4));
        assert_eq!(app.inventory[0].quantity, 0);
    }

    #[test]
    fn test_submit_add_with_quantity_produces_effect() {
        let mut app = app();
        let effect = update(&mut app, Action::SubmitAdd(cart_item(1, "apple", 2)));
        assert_eq!(effect, Effect::AddToCart(cart_item(1, "apple", 2)));
        assert!(app.is_loading);
    }

    #[test]
    fn test_submit_add_at_zero_quantity_is_inert() {
        let mut app = app();
        let effect = update(&mut app, Action::SubmitAdd(cart_item(1, "apple", 0)));
        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.status_message, "Pick a quantity first");
    }

    #[test]
    fn test_submit_remove_and_checkout_produce_effects() {
        let mut app = app();
        assert_eq!(
            update(&mut app, Action::SubmitRemove(7)),
            Effect::RemoveFromCart(7)
        );
        assert_eq!(update(&mut app, Action::SubmitCheckout), Effect::Checkout);
    }

    #[test]
    fn test_store_failed_surfaces_and_leaves_cart_untouched() {
        let mut app = app();
        app.cart = vec![cart_item(1, "apple", 2)];
        app.is_loading = true;
        update(&mut app, Action::StoreFailed("HTTP 500".to_string()));
        assert_eq!(app.cart, vec![cart_item(1, "apple", 2)]);
        assert!(!app.is_loading);
        assert_eq!(app.error.as_deref(), Some("HTTP 500"));
        assert_eq!(app.status_message, "Store error: HTTP 500");
    }

    #[test]
    fn test_quit_produces_quit_effect() {
        let mut app = app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

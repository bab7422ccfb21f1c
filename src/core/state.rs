//! # Application State
//!
//! Core business state for Trolley. This module contains domain data only -
//! no TUI-specific types. Presentation state (panel focus, selections)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── inventory: Vec<InventoryItem>  // remote rows + local stepper counters
//! ├── cart: Vec<CartItem>            // mirror of the remote cart
//! ├── store_label: String            // base URL shown in the title bar
//! ├── status_message: String         // status bar text
//! ├── is_loading: bool               // a store operation is in flight
//! └── error: Option<String>          // last store failure, if any
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::store::{CartItem, InventoryItem};

pub struct App {
    pub inventory: Vec<InventoryItem>,
    pub cart: Vec<CartItem>,
    pub store_label: String,
    pub status_message: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl App {
    pub fn new(store_label: String) -> Self {
        Self {
            inventory: Vec::new(),
            cart: Vec::new(),
            store_label,
            status_message: String::from("Loading storefront..."),
            is_loading: true,
            error: None,
        }
    }
}

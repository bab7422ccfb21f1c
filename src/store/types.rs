use serde::{Deserialize, Serialize};

/// A row of the remote `inventory` collection.
///
/// `quantity` is the local stepper counter, not a remote field: inventory
/// rows arrive without it and it defaults to 0. It only leaves the process
/// as part of the [`CartItem`] copy made when the user presses add.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: u64,
    pub content: String,
    #[serde(default)]
    pub quantity: u32,
}

impl InventoryItem {
    /// Snapshot of this row at its current stepper quantity, ready to be
    /// sent to the cart.
    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            id: self.id,
            content: self.content.clone(),
            quantity: self.quantity,
        }
    }
}

/// A row of the remote `cart` collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: u64,
    pub content: String,
    pub quantity: u32,
}

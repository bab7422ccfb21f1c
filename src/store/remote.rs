use std::fmt;

use async_trait::async_trait;

use super::types::{CartItem, InventoryItem};

/// Errors that can occur while talking to the storefront.
#[derive(Debug)]
pub enum StoreError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The store returned a non-success status.
    Api { status: u16, message: String },
    /// Failed to decode the store's response body.
    Parse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Network(msg) => write!(f, "network error: {msg}"),
            StoreError::Api { status, message } => {
                write!(f, "store error (HTTP {status}): {message}")
            }
            StoreError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// The remote resource store backing the UI: an `inventory` collection
/// (read-only) and a `cart` collection (list, create, partial update,
/// delete). The controller only ever sees this trait, so tests can swap
/// in an in-memory double.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Full inventory list.
    async fn get_inventory(&self) -> Result<Vec<InventoryItem>, StoreError>;

    /// Full cart list.
    async fn get_cart(&self) -> Result<Vec<CartItem>, StoreError>;

    /// Adds an item to the remote cart. If an entry with the same content
    /// label already exists, its quantity is bumped by `item.quantity`
    /// through a partial update; otherwise the item is created as given.
    /// Returns the updated or created entry.
    ///
    /// Remote rows are matched by content label here; the local cache
    /// merges by id. Both keys stay in lockstep for storefront data, where
    /// labels are unique.
    async fn add_to_cart(&self, item: &CartItem) -> Result<CartItem, StoreError>;

    /// Partial update of one cart entry's quantity.
    async fn update_cart(&self, id: u64, quantity: u32) -> Result<CartItem, StoreError>;

    /// Removes one cart entry.
    async fn delete_from_cart(&self, id: u64) -> Result<(), StoreError>;

    /// Empties the remote cart: fetches it, then deletes every entry
    /// concurrently. Fails if any single delete fails, with no guarantee
    /// about which deletes already landed.
    async fn checkout(&self) -> Result<(), StoreError>;
}

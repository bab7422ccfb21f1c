//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;

use async_trait::async_trait;

use crate::store::{CartItem, InventoryItem, RemoteStore, StoreError};

/// An in-memory store double with json-server cart semantics.
///
/// `add_to_cart` splits its read from its write with a yield point, so
/// unserialized concurrent adds can interleave the way two in-flight HTTP
/// round trips would. Tests for the controller's cart gate rely on this.
pub struct MemoryStore {
    inventory: Vec<InventoryItem>,
    cart: Mutex<Vec<CartItem>>,
}

impl MemoryStore {
    pub fn new(inventory: Vec<InventoryItem>, cart: Vec<CartItem>) -> Self {
        Self {
            inventory,
            cart: Mutex::new(cart),
        }
    }

    pub fn cart_snapshot(&self) -> Vec<CartItem> {
        self.cart.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn get_inventory(&self) -> Result<Vec<InventoryItem>, StoreError> {
        Ok(self.inventory.clone())
    }

    async fn get_cart(&self) -> Result<Vec<CartItem>, StoreError> {
        Ok(self.cart.lock().unwrap().clone())
    }

    async fn add_to_cart(&self, item: &CartItem) -> Result<CartItem, StoreError> {
        let snapshot = self.get_cart().await?;
        tokio::task::yield_now().await;
        match snapshot.iter().find(|row| row.content == item.content) {
            Some(existing) => {
                self.update_cart(existing.id, existing.quantity + item.quantity)
                    .await
            }
            None => {
                self.cart.lock().unwrap().push(item.clone());
                Ok(item.clone())
            }
        }
    }

    async fn update_cart(&self, id: u64, quantity: u32) -> Result<CartItem, StoreError> {
        let mut cart = self.cart.lock().unwrap();
        match cart.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.quantity = quantity;
                Ok(row.clone())
            }
            None => Err(StoreError::Api {
                status: 404,
                message: format!("no cart entry {id}"),
            }),
        }
    }

    async fn delete_from_cart(&self, id: u64) -> Result<(), StoreError> {
        self.cart.lock().unwrap().retain(|row| row.id != id);
        Ok(())
    }

    async fn checkout(&self) -> Result<(), StoreError> {
        let snapshot = self.get_cart().await?;
        for row in snapshot {
            self.delete_from_cart(row.id).await?;
        }
        Ok(())
    }
}

/// A store double whose every operation fails at the transport level.
pub struct FailingStore;

#[async_trait]
impl RemoteStore for FailingStore {
    async fn get_inventory(&self) -> Result<Vec<InventoryItem>, StoreError> {
        Err(refused())
    }

    async fn get_cart(&self) -> Result<Vec<CartItem>, StoreError> {
        Err(refused())
    }

    async fn add_to_cart(&self, _item: &CartItem) -> Result<CartItem, StoreError> {
        Err(refused())
    }

    async fn update_cart(&self, _id: u64, _quantity: u32) -> Result<CartItem, StoreError> {
        Err(refused())
    }

    async fn delete_from_cart(&self, _id: u64) -> Result<(), StoreError> {
        Err(refused())
    }

    async fn checkout(&self) -> Result<(), StoreError> {
        Err(refused())
    }
}

fn refused() -> StoreError {
    StoreError::Network("connection refused".to_string())
}

pub fn inventory_row(id: u64, content: &str, quantity: u32) -> InventoryItem {
    InventoryItem {
        id,
        content: content.to_string(),
        quantity,
    }
}

pub fn cart_item(id: u64, content: &str, quantity: u32) -> CartItem {
    CartItem {
        id,
        content: content.to_string(),
        quantity,
    }
}

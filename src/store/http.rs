//! HTTP implementation of [`RemoteStore`] for a json-server style REST
//! endpoint: `GET /inventory`, `GET /cart`, `POST /cart`,
//! `PATCH /cart/{id}`, `DELETE /cart/{id}`. JSON bodies throughout;
//! partial updates send only the changed field.

use async_trait::async_trait;
use futures::future::try_join_all;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::remote::{RemoteStore, StoreError};
use super::types::{CartItem, InventoryItem};

/// Quantity-only body for partial cart updates.
#[derive(Serialize, Debug)]
struct QuantityPatch {
    quantity: u32,
}

/// Storefront client bound to a base endpoint.
pub struct HttpStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Checks the status and decodes the JSON body of a store response.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Store API error: {} - {}", status.as_u16(), message);
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| StoreError::Parse(e.to_string()))
    }

    async fn create_cart_item(&self, item: &CartItem) -> Result<CartItem, StoreError> {
        debug!("POST cart: {:?}", item);
        let response = self
            .client
            .post(self.url("cart"))
            .json(item)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::decode(response).await
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn get_inventory(&self) -> Result<Vec<InventoryItem>, StoreError> {
        debug!("GET inventory");
        let response = self
            .client
            .get(self.url("inventory"))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn get_cart(&self) -> Result<Vec<CartItem>, StoreError> {
        debug!("GET cart");
        let response = self
            .client
            .get(self.url("cart"))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn add_to_cart(&self, item: &CartItem) -> Result<CartItem, StoreError> {
        let cart = self.get_cart().await?;
        match cart.iter().find(|row| row.content == item.content) {
            Some(existing) => {
                let merged = existing.quantity + item.quantity;
                info!(
                    "Merging '{}' into cart entry {} (quantity {} -> {})",
                    item.content, existing.id, existing.quantity, merged
                );
                self.update_cart(existing.id, merged).await
            }
            None => {
                info!("Creating cart entry '{}' x {}", item.content, item.quantity);
                self.create_cart_item(item).await
            }
        }
    }

    async fn update_cart(&self, id: u64, quantity: u32) -> Result<CartItem, StoreError> {
        debug!("PATCH cart/{id}: quantity={quantity}");
        let response = self
            .client
            .patch(self.url(&format!("cart/{id}")))
            .json(&QuantityPatch { quantity })
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn delete_from_cart(&self, id: u64) -> Result<(), StoreError> {
        debug!("DELETE cart/{id}");
        let response = self
            .client
            .delete(self.url(&format!("cart/{id}")))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Delete failed: {} - {}", status.as_u16(), message);
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    async fn checkout(&self) -> Result<(), StoreError> {
        let cart = self.get_cart().await?;
        info!("Checkout: deleting {} cart entries", cart.len());
        try_join_all(cart.iter().map(|row| self.delete_from_cart(row.id))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let store = HttpStore::new("http://localhost:3000/");
        assert_eq!(store.url("cart"), "http://localhost:3000/cart");
    }

    #[test]
    fn test_url_joins_entry_paths() {
        let store = HttpStore::new("http://localhost:3000");
        assert_eq!(store.url("cart/7"), "http://localhost:3000/cart/7");
        assert_eq!(store.url("inventory"), "http://localhost:3000/inventory");
    }
}

pub mod http;
pub mod remote;
pub mod types;

pub use http::HttpStore;
pub use remote::{RemoteStore, StoreError};
pub use types::{CartItem, InventoryItem};

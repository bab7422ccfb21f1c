//! # TUI Components
//!
//! Components follow two patterns, mirroring each other across the two
//! panels:
//!
//! - Stateless, props-based rendering: `TitleBar` receives its text as
//!   borrowed fields and has no state of its own.
//! - Persistent state + transient wrapper: `ListCursor` lives in
//!   `TuiState` across frames; `InventoryList` and `CartList` are built
//!   each frame with borrowed rows and cursor.
//!
//! Each component file contains its state types, rendering logic, and
//! tests.

mod cart_list;
mod inventory_list;
mod list_cursor;
mod title_bar;

pub use cart_list::CartList;
pub use inventory_list::InventoryList;
pub use list_cursor::ListCursor;
pub use title_bar::TitleBar;

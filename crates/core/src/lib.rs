//! `mochila-core` — shared building blocks for the backpack inventory.
//!
//! This crate holds the limits and error model that both the inventory core
//! and the menu driver agree on. It has no IO.

pub mod error;
pub mod limits;

pub use error::{InventoryError, InventoryResult};
pub use limits::{CAPACITY, MAX_CATEGORY_LEN, MAX_NAME_LEN};

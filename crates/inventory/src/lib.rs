//! Backpack inventory core.
//!
//! A fixed-capacity, ordered list of items with insert, positional removal,
//! listing and lookup by name. Pure in-memory logic (no IO, no terminal).

pub mod backpack;
pub mod item;

pub use backpack::Inventory;
pub use item::Item;
pub use mochila_core::{CAPACITY, InventoryError, InventoryResult};

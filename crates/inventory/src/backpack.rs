use serde::Serialize;

use mochila_core::{CAPACITY, InventoryError, InventoryResult};

use crate::item::Item;

/// Bounded, ordered collection of items.
///
/// Invariant: `0 <= len() <= CAPACITY`. Insertion order defines position and
/// removal compacts the sequence, so there are never gaps.
///
/// Positions handed in and out of this type are 1-based, as shown to the
/// player.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    /// Create an empty backpack. The backing storage is allocated once and
    /// never grows past `CAPACITY`.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= CAPACITY
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Free slots left.
    pub fn remaining(&self) -> usize {
        CAPACITY - self.items.len()
    }

    /// Append `item` as the last element.
    ///
    /// Fails with `CapacityExceeded` when full; the contents are left untouched.
    pub fn insert(&mut self, item: Item) -> InventoryResult<()> {
        if self.is_full() {
            tracing::debug!(name = item.name(), "insert rejected: backpack full");
            return Err(InventoryError::CapacityExceeded { capacity: CAPACITY });
        }

        tracing::debug!(name = item.name(), len = self.items.len() + 1, "item inserted");
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the item at 1-based `position`.
    ///
    /// Every following item shifts one position earlier, so this is O(len).
    pub fn remove_at(&mut self, position: usize) -> InventoryResult<Item> {
        let len = self.items.len();
        if len == 0 {
            return Err(InventoryError::EmptyCollection);
        }
        if position == 0 || position > len {
            tracing::debug!(position, len, "remove rejected: position out of range");
            return Err(InventoryError::IndexOutOfRange { position, len });
        }

        let removed = self.items.remove(position - 1);
        tracing::debug!(name = removed.name(), position, len = len - 1, "item removed");
        Ok(removed)
    }

    /// Read-only view of all items in storage order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// `(position, item)` pairs in storage order, positions starting at 1.
    pub fn iter_positions(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.items.iter().enumerate().map(|(idx, item)| (idx + 1, item))
    }

    /// First item whose name equals `name` exactly (case-sensitive, no
    /// trimming), with its 1-based position.
    pub fn find_by_name(&self, name: &str) -> Option<(usize, &Item)> {
        self.iter_positions().find(|(_, item)| item.name() == name)
    }

    /// Like [`Inventory::find_by_name`], but distinguishes an empty backpack
    /// from a missing name.
    pub fn search(&self, name: &str) -> InventoryResult<(usize, &Item)> {
        if self.is_empty() {
            return Err(InventoryError::EmptyCollection);
        }
        self.find_by_name(name)
            .ok_or_else(|| InventoryError::not_found(name))
    }
}

//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory core.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is recoverable: the collection is left exactly as it was
/// before the failing call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Insert attempted while the backpack is full.
    #[error("backpack is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// Remove or search attempted on an empty backpack.
    #[error("backpack is empty")]
    EmptyCollection,

    /// Position outside `1..=len`.
    #[error("position {position} is out of range (1 to {len})")]
    IndexOutOfRange { position: usize, len: usize },

    /// No item carries the requested name.
    #[error("no item named '{name}'")]
    NotFound { name: String },

    /// A value failed validation (e.g. name too long).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}

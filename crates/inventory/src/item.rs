use serde::Serialize;

use mochila_core::{InventoryError, InventoryResult, MAX_CATEGORY_LEN, MAX_NAME_LEN};

/// A single record carried in the backpack.
///
/// Items are values: once stored they are never edited in place, only
/// removed or replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    name: String,
    category: String,
    /// Kilograms. Informational only; no weight limit is enforced.
    weight: f32,
    quantity: i32,
}

impl Item {
    /// Build an item, enforcing the storage bounds on `name` and `category`.
    ///
    /// Lengths are counted in characters, not bytes. `weight` and `quantity`
    /// are taken as-is.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        weight: f32,
        quantity: i32,
    ) -> InventoryResult<Self> {
        let name = name.into();
        let category = category.into();

        if name.chars().count() > MAX_NAME_LEN {
            return Err(InventoryError::validation(format!(
                "name cannot exceed {MAX_NAME_LEN} characters"
            )));
        }
        if category.chars().count() > MAX_CATEGORY_LEN {
            return Err(InventoryError::validation(format!(
                "category cannot exceed {MAX_CATEGORY_LEN} characters"
            )));
        }

        Ok(Self {
            name,
            category,
            weight,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

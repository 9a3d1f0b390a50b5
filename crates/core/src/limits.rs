//! Storage limits shared between the inventory core and its driver.

/// Maximum number of items the backpack may hold.
pub const CAPACITY: usize = 10;

/// Maximum length of an item name, in characters.
pub const MAX_NAME_LEN: usize = 49;

/// Maximum length of an item category, in characters.
pub const MAX_CATEGORY_LEN: usize = 19;

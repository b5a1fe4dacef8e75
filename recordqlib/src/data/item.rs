//! Inventory item record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry in an inventory.
///
/// Items have no identity beyond their field values; several items may share
/// a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Display name of the item
    pub name: String,
    /// Remaining durability (lower means more worn)
    pub durability: i32,
    /// Category such as "Weapon" or "Armor"
    #[serde(rename = "type")]
    pub item_type: String,
}

impl Item {
    /// Create a new item.
    pub fn new(name: impl Into<String>, durability: i32, item_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            durability,
            item_type: item_type.into(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.item_type, self.name, self.durability)
    }
}

//! Item record as read from the item store.

use serde::{Deserialize, Serialize};

/// A catalog item. Read-only from the service's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub status: String,
}

impl Item {
    /// Creates a new Item
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            status: status.into(),
        }
    }
}

//! Order entity linking a user to an item

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::Quantity;

/// Order entity linking a user to an item
///
/// `user_id` and `item_id` are plain references. Whether they point at
/// existing records is checked when the order is created, not here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: String,
    user_id: String,
    item_id: String,
    quantity: Quantity,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        item_id: impl Into<String>,
        quantity: Quantity,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            item_id: item_id.into(),
            quantity,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Return a copy of this order with a new quantity
    pub fn change_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }
}

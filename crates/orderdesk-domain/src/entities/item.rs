//! Item entity representing something that can be ordered

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::Price;

/// Item entity representing something that can be ordered
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: String,
    name: String,
    price: Price,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Item {
    /// Assemble an item from already-validated parts
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Price,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Return a copy of this item with a new price
    pub fn change_price(&self, price: Price) -> Self {
        Self {
            price,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }
}

//! Raw seed records and their conversion into entities
//!
//! Records arrive as untyped JSON values. Decoding only checks the shape
//! (field names and primitive types); every constrained field is then passed
//! through its value-object factory, which is where invalid data is refused.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use orderdesk_domain::{
    entities::{Item, Order, User},
    errors::DomainResult,
    value_objects::{Email, Price, Quantity},
};

use crate::error::PersistenceError;

/// A raw record shape that can be turned into a domain entity
pub trait SeedRecord: DeserializeOwned {
    /// Entity produced by this record
    type Entity;

    /// Name used in error messages and logs
    const ENTITY_TYPE: &'static str;

    /// Build the entity, validating primitives through value-object factories
    fn into_entity(self) -> DomainResult<Self::Entity>;

    /// Decode an untyped value into this record shape
    fn decode(value: &Value) -> Result<Self, PersistenceError> {
        Self::deserialize(value)
            .map_err(|e| PersistenceError::invalid_record(Self::ENTITY_TYPE, e.to_string()))
    }
}

/// Raw user row
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SeedRecord for UserRecord {
    type Entity = User;
    const ENTITY_TYPE: &'static str = "user";

    fn into_entity(self) -> DomainResult<User> {
        let email = Email::create(&self.email)?;
        let (created_at, updated_at) = timestamps(self.created_at, self.updated_at);
        Ok(User::new(
            self.id,
            self.name,
            email,
            self.password,
            created_at,
            updated_at,
        ))
    }
}

/// Raw item row
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SeedRecord for ItemRecord {
    type Entity = Item;
    const ENTITY_TYPE: &'static str = "item";

    fn into_entity(self) -> DomainResult<Item> {
        let price = Price::create(self.price)?;
        let (created_at, updated_at) = timestamps(self.created_at, self.updated_at);
        Ok(Item::new(self.id, self.name, price, created_at, updated_at))
    }
}

/// Raw order row
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub user_id: String,
    pub item_id: String,
    pub quantity: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SeedRecord for OrderRecord {
    type Entity = Order;
    const ENTITY_TYPE: &'static str = "order";

    fn into_entity(self) -> DomainResult<Order> {
        let quantity = Quantity::create(self.quantity)?;
        let (created_at, updated_at) = timestamps(self.created_at, self.updated_at);
        Ok(Order::new(
            self.id,
            self.user_id,
            self.item_id,
            quantity,
            created_at,
            updated_at,
        ))
    }
}

/// Decode and validate a single raw value in one step
pub fn entity_from_value<R: SeedRecord>(value: &Value) -> DomainResult<R::Entity> {
    R::decode(value)?.into_entity()
}

// Missing timestamps default to load time; a missing `updatedAt` follows `createdAt`.
fn timestamps(
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let created_at = created_at.unwrap_or_else(Utc::now);
    (created_at, updated_at.unwrap_or(created_at))
}

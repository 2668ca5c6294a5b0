//! In-Memory Order Repository Implementation

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use orderdesk_domain::{
    entities::Order,
    errors::DomainResult,
    repositories::{OrderRepository, Repository},
};

use super::table::EntityTable;
use crate::records::{entity_from_value, OrderRecord};

/// Thread-safe in-memory implementation of OrderRepository
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<EntityTable<Order>>,
}

impl InMemoryOrderRepository {
    /// Create a new empty in-memory order repository
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(EntityTable::new()),
        }
    }

    /// Create with initial orders (useful for testing)
    pub fn with_orders(orders: Vec<Order>) -> Self {
        let mut table = EntityTable::new();
        for order in orders {
            table.upsert(order.id(), order.clone());
        }
        Self {
            orders: RwLock::new(table),
        }
    }

    /// Bulk-load raw records; fails on the first invalid one
    pub async fn initialize_with_db_data(&self, records: &[Value]) -> DomainResult<usize> {
        for value in records {
            self.initialize_record(value).await?;
        }
        debug!(count = records.len(), "Loaded order records");
        Ok(records.len())
    }

    /// Load a single raw record without logging
    pub async fn initialize_record(&self, record: &Value) -> DomainResult<()> {
        let order = entity_from_value::<OrderRecord>(record)?;
        self.save(&order).await
    }

    pub fn count(&self) -> usize {
        self.orders.read().len()
    }

    pub fn clear(&self) {
        self.orders.write().clear();
    }
}

#[async_trait]
impl Repository<Order> for InMemoryOrderRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Order>> {
        Ok(self.orders.read().get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<Order>> {
        Ok(self.orders.read().values())
    }

    async fn save(&self, order: &Order) -> DomainResult<()> {
        self.orders.write().upsert(order.id(), order.clone());
        debug!(order_id = order.id(), user_id = order.user_id(), "Saved order");
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let removed = self.orders.write().remove(id);
        debug!(order_id = id, removed, "Deleted order");
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Vec<Order>> {
        Ok(self
            .orders
            .read()
            .values_where(|order| order.user_id() == user_id))
    }
}

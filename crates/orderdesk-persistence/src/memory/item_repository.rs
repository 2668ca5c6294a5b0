//! In-Memory Item Repository Implementation

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use orderdesk_domain::{
    entities::Item,
    errors::DomainResult,
    repositories::{ItemRepository, Repository},
};

use super::table::EntityTable;
use crate::records::{entity_from_value, ItemRecord};

/// Thread-safe in-memory implementation of ItemRepository
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<EntityTable<Item>>,
}

impl InMemoryItemRepository {
    /// Create a new empty in-memory item repository
    pub fn new() -> Self {
        Self {
            items: RwLock::new(EntityTable::new()),
        }
    }

    /// Create with initial items (useful for testing)
    pub fn with_items(items: Vec<Item>) -> Self {
        let mut table = EntityTable::new();
        for item in items {
            table.upsert(item.id(), item.clone());
        }
        Self {
            items: RwLock::new(table),
        }
    }

    /// Bulk-load raw records; fails on the first invalid one
    pub async fn initialize_with_db_data(&self, records: &[Value]) -> DomainResult<usize> {
        for value in records {
            self.initialize_record(value).await?;
        }
        debug!(count = records.len(), "Loaded item records");
        Ok(records.len())
    }

    /// Load a single raw record without logging
    pub async fn initialize_record(&self, record: &Value) -> DomainResult<()> {
        let item = entity_from_value::<ItemRecord>(record)?;
        self.save(&item).await
    }

    pub fn count(&self) -> usize {
        self.items.read().len()
    }

    pub fn clear(&self) {
        self.items.write().clear();
    }
}

#[async_trait]
impl Repository<Item> for InMemoryItemRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Item>> {
        Ok(self.items.read().get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<Item>> {
        Ok(self.items.read().values())
    }

    async fn save(&self, item: &Item) -> DomainResult<()> {
        self.items.write().upsert(item.id(), item.clone());
        debug!(item_id = item.id(), "Saved item");
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let removed = self.items.write().remove(id);
        debug!(item_id = id, removed, "Deleted item");
        Ok(())
    }
}

impl ItemRepository for InMemoryItemRepository {}

//! In-Memory User Repository Implementation

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use orderdesk_domain::{
    entities::User,
    errors::DomainResult,
    repositories::{Repository, UserRepository},
    value_objects::Email,
};

use super::table::EntityTable;
use crate::records::{entity_from_value, UserRecord};

/// Thread-safe in-memory implementation of UserRepository
///
/// Uses RwLock for concurrent read access with exclusive write access.
/// Stores cloned User instances to maintain isolation.
///
/// # Example
///
/// ```ignore
/// use orderdesk_persistence::memory::InMemoryUserRepository;
/// use std::sync::Arc;
///
/// let repo = Arc::new(InMemoryUserRepository::new());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<EntityTable<User>>,
}

impl InMemoryUserRepository {
    /// Create a new empty in-memory user repository
    pub fn new() -> Self {
        Self {
            users: RwLock::new(EntityTable::new()),
        }
    }

    /// Create with initial users (useful for testing)
    pub fn with_users(users: Vec<User>) -> Self {
        let mut table = EntityTable::new();
        for user in users {
            table.upsert(user.id(), user.clone());
        }
        Self {
            users: RwLock::new(table),
        }
    }

    /// Bulk-load raw records, validating each through the value-object factories
    ///
    /// Stops at the first invalid record; records before it stay saved.
    /// Returns the number of records loaded.
    pub async fn initialize_with_db_data(&self, records: &[Value]) -> DomainResult<usize> {
        for value in records {
            self.initialize_record(value).await?;
        }
        debug!(count = records.len(), "Loaded user records");
        Ok(records.len())
    }

    /// Load a single raw record without logging
    pub async fn initialize_record(&self, record: &Value) -> DomainResult<()> {
        let user = entity_from_value::<UserRecord>(record)?;
        self.save(&user).await
    }

    /// Get the current count of users (for testing)
    pub fn count(&self) -> usize {
        self.users.read().len()
    }

    /// Clear all users (for testing)
    pub fn clear(&self) {
        self.users.write().clear();
    }
}

#[async_trait]
impl Repository<User> for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(self.users.read().get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.read().values())
    }

    async fn save(&self, user: &User) -> DomainResult<()> {
        self.users.write().upsert(user.id(), user.clone());
        debug!(user_id = user.id(), "Saved user");
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let removed = self.users.write().remove(id);
        debug!(user_id = id, removed, "Deleted user");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.read();
        Ok(users.values_where(|user| user.email() == email).into_iter().next())
    }
}

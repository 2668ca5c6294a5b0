//! Repository interfaces for data persistence
//!
//! The domain layer defines only the contracts. Use cases depend on these
//! traits and never on a concrete store; implementations live in
//! infrastructure crates.
//!
//! Every store is keyed by the entity's string id. `find_by_id` reports a
//! missing entity as `Ok(None)`, `save` is an upsert and `delete` of an
//! unknown id is a no-op.

use async_trait::async_trait;

use crate::{
    entities::{Item, Order, User},
    errors::DomainResult,
    value_objects::Email,
};

/// Generic repository trait for common operations
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Find by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<T>>;

    /// Find all entities, in insertion order
    async fn find_all(&self) -> DomainResult<Vec<T>>;

    /// Insert or overwrite the entity with the same ID
    async fn save(&self, entity: &T) -> DomainResult<()>;

    /// Delete by ID
    async fn delete(&self, id: &str) -> DomainResult<()>;

    /// Check existence
    async fn exists(&self, id: &str) -> DomainResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

/// Repository for user entities
#[async_trait]
pub trait UserRepository: Repository<User> {
    /// Find the user whose email equals `email` under value-object equality
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;
}

/// Repository for item entities
pub trait ItemRepository: Repository<Item> {}

/// Repository for order entities
#[async_trait]
pub trait OrderRepository: Repository<Order> {
    /// Find orders placed by `user_id`, in insertion order
    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Vec<Order>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Price;
    use chrono::Utc;

    struct SingleItem(Item);

    #[async_trait]
    impl Repository<Item> for SingleItem {
        async fn find_by_id(&self, id: &str) -> DomainResult<Option<Item>> {
            Ok((self.0.id() == id).then(|| self.0.clone()))
        }

        async fn find_all(&self) -> DomainResult<Vec<Item>> {
            Ok(vec![self.0.clone()])
        }

        async fn save(&self, _entity: &Item) -> DomainResult<()> {
            Ok(())
        }

        async fn delete(&self, _id: &str) -> DomainResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_exists_follows_find_by_id() {
        let now = Utc::now();
        let repo = SingleItem(Item::new("1", "Item 1", Price::create(100.0).unwrap(), now, now));
        assert!(repo.exists("1").await.unwrap());
        assert!(!repo.exists("2").await.unwrap());
    }
}

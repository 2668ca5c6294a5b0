//! Create Order use case

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use orderdesk_domain::entities::Order;
use orderdesk_domain::errors::{DomainError, DomainResult};
use orderdesk_domain::repositories::{ItemRepository, OrderRepository, Repository, UserRepository};
use orderdesk_domain::value_objects::Quantity;

use crate::ports::{IdGenerator, UuidIdGenerator};

/// Places an order for an existing user and an existing item
///
/// Checks run in order and stop at the first failure: user, then item,
/// then quantity. Nothing is saved unless all of them pass.
pub struct CreateOrderUseCase<O, I, U>
where
    O: OrderRepository + ?Sized,
    I: ItemRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    order_repository: Arc<O>,
    item_repository: Arc<I>,
    user_repository: Arc<U>,
    id_generator: Arc<dyn IdGenerator>,
}

impl<O, I, U> CreateOrderUseCase<O, I, U>
where
    O: OrderRepository + ?Sized,
    I: ItemRepository + ?Sized,
    U: UserRepository + ?Sized,
{
    /// Create the use case with random UUID ids
    pub fn new(order_repository: Arc<O>, item_repository: Arc<I>, user_repository: Arc<U>) -> Self {
        Self::with_id_generator(
            order_repository,
            item_repository,
            user_repository,
            Arc::new(UuidIdGenerator),
        )
    }

    /// Create the use case with an explicit id source
    pub fn with_id_generator(
        order_repository: Arc<O>,
        item_repository: Arc<I>,
        user_repository: Arc<U>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            order_repository,
            item_repository,
            user_repository,
            id_generator,
        }
    }

    /// `quantity` is the raw number from the caller; it is validated here
    pub async fn execute(&self, user_id: &str, item_id: &str, quantity: f64) -> DomainResult<Order> {
        if self.user_repository.find_by_id(user_id).await?.is_none() {
            warn!(user_id, "Order rejected: user not found");
            return Err(DomainError::new(format!("user not found: {}", user_id)));
        }

        if self.item_repository.find_by_id(item_id).await?.is_none() {
            warn!(item_id, "Order rejected: item not found");
            return Err(DomainError::new(format!("item not found: {}", item_id)));
        }

        let quantity = Quantity::create(quantity)?;
        let now = Utc::now();
        let order = Order::new(self.id_generator.next_id(), user_id, item_id, quantity, now, now);
        self.order_repository.save(&order).await?;

        info!(order_id = order.id(), user_id, item_id, quantity = quantity.value(), "Created order");
        Ok(order)
    }
}

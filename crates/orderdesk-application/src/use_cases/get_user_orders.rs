//! Get User Orders use case

use std::sync::Arc;

use orderdesk_domain::entities::Order;
use orderdesk_domain::errors::DomainResult;
use orderdesk_domain::repositories::OrderRepository;

/// Lists a user's orders
///
/// The user id is not checked for existence; an unknown id yields an empty list.
pub struct GetUserOrdersUseCase<R>
where
    R: OrderRepository + ?Sized,
{
    order_repository: Arc<R>,
}

impl<R> GetUserOrdersUseCase<R>
where
    R: OrderRepository + ?Sized,
{
    pub fn new(order_repository: Arc<R>) -> Self {
        Self { order_repository }
    }

    pub async fn execute(&self, user_id: &str) -> DomainResult<Vec<Order>> {
        self.order_repository.find_by_user_id(user_id).await
    }
}

use orderdesk_application::{CreateOrderUseCase, GetUserOrdersUseCase};
use orderdesk_domain::entities::Order;
use orderdesk_domain::repositories::{ItemRepository, OrderRepository, UserRepository};
use tracing::debug;

use crate::response::ApiResponse;

type DynCreateOrder =
    CreateOrderUseCase<dyn OrderRepository, dyn ItemRepository, dyn UserRepository>;

pub struct OrderController {
    create_order: DynCreateOrder,
    get_user_orders: GetUserOrdersUseCase<dyn OrderRepository>,
}

impl OrderController {
    pub fn new(
        create_order: DynCreateOrder,
        get_user_orders: GetUserOrdersUseCase<dyn OrderRepository>,
    ) -> Self {
        Self {
            create_order,
            get_user_orders,
        }
    }

    /// `quantity` is passed through unvalidated; the use case rejects bad values
    pub async fn create_order(
        &self,
        user_id: &str,
        item_id: &str,
        quantity: f64,
    ) -> ApiResponse<Order> {
        debug!(user_id, item_id, quantity, "create_order");
        self.create_order
            .execute(user_id, item_id, quantity)
            .await
            .into()
    }

    pub async fn get_user_orders(&self, user_id: &str) -> ApiResponse<Vec<Order>> {
        debug!(user_id, "get_user_orders");
        self.get_user_orders.execute(user_id).await.into()
    }
}

//! Application use cases
//!
//! Use cases depend only on repository traits and receive them by
//! constructor injection. Domain errors are never caught here; they
//! propagate to the caller unchanged.

mod create_order;
mod get_user_orders;
mod get_users;
mod register_user;

pub use create_order::CreateOrderUseCase;
pub use get_user_orders::GetUserOrdersUseCase;
pub use get_users::GetUsersUseCase;
pub use register_user::RegisterUserUseCase;

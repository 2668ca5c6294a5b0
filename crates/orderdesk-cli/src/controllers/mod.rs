//! Thin controllers shaping use-case results into [`crate::ApiResponse`]

mod order_controller;
mod user_controller;

pub use order_controller::OrderController;
pub use user_controller::UserController;

//! Identity-bearing domain entities
//!
//! Entities are immutable: every `change_*` operation returns a new instance
//! that keeps the id and `created_at`, and stamps a fresh `updated_at`.
//! - `user`: registered customer
//! - `item`: purchasable item
//! - `order`: a user's order for an item

mod item;
mod order;
mod user;

pub use item::*;
pub use order::*;
pub use user::*;

//! In-Memory Repository Implementations
//!
//! Thread-safe in-memory implementations of domain repository interfaces.
//! Nothing survives a process restart and nothing is evicted.

mod item_repository;
mod order_repository;
mod table;
mod user_repository;

pub use item_repository::InMemoryItemRepository;
pub use order_repository::InMemoryOrderRepository;
pub use user_repository::InMemoryUserRepository;

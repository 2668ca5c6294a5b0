//! orderdesk Persistence Layer
//!
//! Infrastructure layer providing repository implementations for the domain
//! entities. This crate implements the repository interfaces defined in
//! `orderdesk-domain`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Infrastructure Layer                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  memory/                         │  records                      │
//! │  InMemoryUserRepository          │  UserRecord                   │
//! │  InMemoryItemRepository          │  ItemRecord                   │
//! │  InMemoryOrderRepository         │  OrderRecord                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ implements
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       Domain Layer                               │
//! │       UserRepository, ItemRepository, OrderRepository            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use orderdesk_persistence::memory::InMemoryUserRepository;
//! use orderdesk_domain::repositories::UserRepository;
//! use std::sync::Arc;
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! ```

pub mod error;
pub mod memory;
pub mod records;

pub use error::PersistenceError;

// Re-export commonly used types
pub use memory::{InMemoryItemRepository, InMemoryOrderRepository, InMemoryUserRepository};
pub use records::{ItemRecord, OrderRecord, SeedRecord, UserRecord};

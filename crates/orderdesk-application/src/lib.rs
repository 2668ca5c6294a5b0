//! orderdesk Application Layer
//!
//! The Application Layer implements use cases by orchestrating repositories
//! and domain rules. Each use case is a single request/response operation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Application Layer                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Use cases                              │ Ports                          │
//! │  ─────────                              │ ─────                          │
//! │  RegisterUserUseCase                    │ IdGenerator                    │
//! │  GetUsersUseCase                        │   UuidIdGenerator              │
//! │  CreateOrderUseCase                     │                                │
//! │  GetUserOrdersUseCase                   │                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ depends on
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Layer                                     │
//! │        Entities, Value Objects, DomainError, Repository Traits          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Non-Goals
//!
//! - Domain invariants (belong in value objects and entities)
//! - Concrete storage (belongs in the persistence crate)
//! - Response shaping (belongs in the presentation layer)

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{IdGenerator, UuidIdGenerator};
pub use use_cases::*;

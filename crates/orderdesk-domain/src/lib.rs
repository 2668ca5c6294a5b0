//! orderdesk domain layer
//!
//! Value objects guard their own invariants, entities are immutable records
//! built from them, and repository traits describe persistence without
//! naming a storage technology.
//!
//! ```text
//! value_objects  <-  entities  <-  repositories
//!        \______________ errors ______/
//! ```

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

pub use entities::{Item, Order, User};
pub use errors::{DomainError, DomainResult};
pub use repositories::{ItemRepository, OrderRepository, Repository, UserRepository};
pub use value_objects::{Amount, Email, Price, Quantity};

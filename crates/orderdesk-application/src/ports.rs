//! Outbound ports required by the use cases

use uuid::Uuid;

/// Source of identifiers for newly created entities
///
/// Ids must be unique for the lifetime of the store they are saved into.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUID identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

//! Persistence Layer Error Types
//!
//! Error mapping to domain types

use orderdesk_domain::errors::DomainError;
use thiserror::Error;

/// Errors that can occur while turning raw records into entities
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// A raw record could not be decoded into the expected shape
    #[error("Invalid {entity_type} record: {reason}")]
    InvalidRecord {
        entity_type: &'static str,
        reason: String,
    },
}

impl PersistenceError {
    /// Create an invalid record error
    pub fn invalid_record(entity_type: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            entity_type,
            reason: reason.into(),
        }
    }
}

/// Convert persistence errors to domain errors
impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        DomainError::new(err.to_string())
    }
}

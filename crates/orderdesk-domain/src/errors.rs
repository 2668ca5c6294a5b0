//! Domain errors for orderdesk

use thiserror::Error;

/// The single error kind raised when an invariant or business rule is violated.
///
/// Invalid input, missing references and duplicate registrations all share
/// this type and are told apart only by their reason text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct DomainError {
    reason: String,
}

impl DomainError {
    /// Create a domain error with a human-readable reason
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Get the reason
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_reason() {
        let err = DomainError::new("user not found");
        assert_eq!(err.to_string(), "user not found");
        assert_eq!(err.reason(), "user not found");
    }

    #[test]
    fn test_equality_by_reason() {
        assert_eq!(DomainError::new("a"), DomainError::new("a"));
        assert_ne!(DomainError::new("a"), DomainError::new("b"));
    }
}

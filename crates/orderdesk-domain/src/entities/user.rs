//! User entity representing a registered customer

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::Email;

/// User entity representing a registered customer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: String,
    name: String,
    email: Email,
    // Stored as given, unhashed; never part of the serialized form.
    #[serde(skip_serializing)]
    password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Assemble a user from already-validated parts
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: Email,
        password: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email,
            password: password.into(),
            created_at,
            updated_at,
        }
    }

    /// Get user ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get email
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Get the stored password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Get created timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Get updated timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Return a copy of this user with a new name
    ///
    /// The name must contain at least one non-whitespace character.
    pub fn change_name(&self, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::new("user name is required"));
        }
        Ok(Self {
            name,
            updated_at: Utc::now(),
            ..self.clone()
        })
    }
}

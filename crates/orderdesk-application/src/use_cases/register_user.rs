//! Register User use case

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use orderdesk_domain::entities::User;
use orderdesk_domain::errors::{DomainError, DomainResult};
use orderdesk_domain::repositories::{Repository, UserRepository};
use orderdesk_domain::value_objects::Email;

use crate::ports::{IdGenerator, UuidIdGenerator};

/// Registers a new user, refusing an email that is already taken
///
/// The password is stored as given; hashing is out of scope here.
pub struct RegisterUserUseCase<R>
where
    R: UserRepository + ?Sized,
{
    user_repository: Arc<R>,
    id_generator: Arc<dyn IdGenerator>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository + ?Sized,
{
    /// Create the use case with random UUID ids
    pub fn new(user_repository: Arc<R>) -> Self {
        Self::with_id_generator(user_repository, Arc::new(UuidIdGenerator))
    }

    /// Create the use case with an explicit id source
    pub fn with_id_generator(user_repository: Arc<R>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            user_repository,
            id_generator,
        }
    }

    pub async fn execute(&self, name: &str, email: &str, password: &str) -> DomainResult<User> {
        let email = Email::create(email)?;

        if self.user_repository.find_by_email(&email).await?.is_some() {
            warn!(email = %email, "Registration rejected: email already registered");
            return Err(DomainError::new(format!(
                "email is already registered: {}",
                email
            )));
        }

        let now = Utc::now();
        let user = User::new(self.id_generator.next_id(), name, email, password, now, now);
        self.user_repository.save(&user).await?;

        info!(user_id = user.id(), "Registered user");
        Ok(user)
    }
}

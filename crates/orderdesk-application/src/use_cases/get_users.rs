//! Get Users use case

use std::sync::Arc;

use orderdesk_domain::entities::User;
use orderdesk_domain::errors::DomainResult;
use orderdesk_domain::repositories::{Repository, UserRepository};

/// Lists every registered user as stored
pub struct GetUsersUseCase<R>
where
    R: UserRepository + ?Sized,
{
    user_repository: Arc<R>,
}

impl<R> GetUsersUseCase<R>
where
    R: UserRepository + ?Sized,
{
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }

    pub async fn execute(&self) -> DomainResult<Vec<User>> {
        self.user_repository.find_all().await
    }
}

use orderdesk_application::{GetUsersUseCase, RegisterUserUseCase};
use orderdesk_domain::entities::User;
use orderdesk_domain::repositories::UserRepository;
use tracing::debug;

use crate::response::ApiResponse;

pub struct UserController {
    register_user: RegisterUserUseCase<dyn UserRepository>,
    get_users: GetUsersUseCase<dyn UserRepository>,
}

impl UserController {
    pub fn new(
        register_user: RegisterUserUseCase<dyn UserRepository>,
        get_users: GetUsersUseCase<dyn UserRepository>,
    ) -> Self {
        Self {
            register_user,
            get_users,
        }
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResponse<User> {
        debug!(email, "register");
        self.register_user.execute(name, email, password).await.into()
    }

    pub async fn get_users(&self) -> ApiResponse<Vec<User>> {
        debug!("get_users");
        self.get_users.execute().await.into()
    }
}

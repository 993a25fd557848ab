use std::sync::Arc;

use tracing::info;

use crate::application::{Clock, UserRepository};
use crate::domain::{DomainError, NewUser, User};

pub struct CreateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl CreateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }

    pub async fn execute(&self, new_user: NewUser) -> Result<User, DomainError> {
        let created_at = self.clock.today();
        let user = self.user_repo.insert(new_user, created_at).await?;

        info!("Created user {}", user.summary());

        Ok(user)
    }
}

use std::sync::Arc;

use tracing::debug;

use crate::application::UserRepository;
use crate::domain::{DomainError, User};

pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

pub struct GetUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, id: u64) -> Result<User, DomainError> {
        debug!("Fetching user {}", id);
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND_MESSAGE))
    }
}

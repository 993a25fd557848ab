use std::sync::Arc;

use tracing::info;

use crate::application::UserRepository;
use crate::domain::DomainError;

/// Use case for permanently removing a user.
pub struct DeleteUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, id: u64) -> Result<(), DomainError> {
        self.user_repo.delete(id).await?;

        info!("Deleted user {}", id);

        Ok(())
    }
}

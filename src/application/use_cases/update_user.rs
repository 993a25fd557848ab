use std::sync::Arc;

use tracing::info;

use crate::application::UserRepository;
use crate::domain::{DomainError, User, UserChanges};

use super::USER_NOT_FOUND_MESSAGE;

pub struct UpdateUserUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// `payload` carries the outcome of parsing the request body. An unknown
    /// id is reported before a bad payload.
    pub async fn execute(
        &self,
        id: u64,
        payload: Result<UserChanges, DomainError>,
    ) -> Result<User, DomainError> {
        if self.user_repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found(USER_NOT_FOUND_MESSAGE));
        }

        let changes = payload?;
        let user = self.user_repo.update(id, &changes).await?;

        info!("Updated user {}", user.summary());

        Ok(user)
    }
}

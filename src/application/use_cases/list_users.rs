use std::sync::Arc;

use tracing::debug;

use crate::application::UserRepository;
use crate::domain::{DomainError, User};

pub struct ListUsersUseCase {
    user_repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self) -> Result<Vec<User>, DomainError> {
        let users = self.user_repo.list().await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::InMemoryUserRepository;

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = Arc::new(InMemoryUserRepository::seeded());
        let use_case = ListUsersUseCase::new(repo);

        let users = use_case.execute().await.unwrap();

        let ids: Vec<u64> = users.iter().map(|u| u.id()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_list_is_repeatable() {
        let repo = Arc::new(InMemoryUserRepository::seeded());
        let use_case = ListUsersUseCase::new(repo);

        let first = use_case.execute().await.unwrap();
        let second = use_case.execute().await.unwrap();

        assert_eq!(first, second);
    }
}

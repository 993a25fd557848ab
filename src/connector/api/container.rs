use std::sync::Arc;

use tracing::debug;

use crate::application::{
    Clock, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    UpdateUserUseCase, UserRepository,
};
use crate::connector::{InMemoryUserRepository, SystemClock};

pub struct ContainerConfig {
    /// Preload the registry with the two startup users.
    pub seed: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

/// Owns the registry and hands out use cases to request handlers.
pub struct Container {
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let user_repo = if config.seed {
            debug!("Seeding user registry");
            InMemoryUserRepository::seeded()
        } else {
            debug!("Starting with an empty user registry");
            InMemoryUserRepository::new()
        };

        Self::with_components(Arc::new(user_repo), Arc::new(SystemClock::new()))
    }

    pub fn with_components(user_repo: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { user_repo, clock }
    }

    pub fn list_use_case(&self) -> ListUsersUseCase {
        ListUsersUseCase::new(self.user_repo.clone())
    }

    pub fn get_use_case(&self) -> GetUserUseCase {
        GetUserUseCase::new(self.user_repo.clone())
    }

    pub fn create_use_case(&self) -> CreateUserUseCase {
        CreateUserUseCase::new(self.user_repo.clone(), self.clock.clone())
    }

    pub fn update_use_case(&self) -> UpdateUserUseCase {
        UpdateUserUseCase::new(self.user_repo.clone())
    }

    pub fn delete_use_case(&self) -> DeleteUserUseCase {
        DeleteUserUseCase::new(self.user_repo.clone())
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(ContainerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_container() {
        let container = Container::new(ContainerConfig { seed: true });

        let users = container.list_use_case().execute().await.unwrap();

        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_unseeded_container() {
        let container = Container::new(ContainerConfig { seed: false });

        let users = container.list_use_case().execute().await.unwrap();

        assert!(users.is_empty());
    }
}

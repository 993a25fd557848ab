use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{UserRepository, USER_NOT_FOUND_MESSAGE};
use crate::domain::{DomainError, NewUser, User, UserChanges};

const EMAIL_EXISTS_MESSAGE: &str = "Email already exists";

/// Process-local user registry. The whole collection sits behind one lock;
/// every trait method holds it for its full read/modify/write sequence.
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    /// Registry preloaded with the two startup records.
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    #[cfg(test)]
    pub(crate) async fn count(&self) -> usize {
        self.users.lock().await.len()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.lock().await;
        Ok(users.clone())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.id() == id).cloned())
    }

    async fn insert(&self, user: NewUser, created_at: NaiveDate) -> Result<User, DomainError> {
        let mut users = self.users.lock().await;

        if users.iter().any(|u| u.has_email(user.email())) {
            return Err(DomainError::already_exists(EMAIL_EXISTS_MESSAGE));
        }

        let id = next_id(&users);
        let (name, email) = user.into_parts();
        let user = User::new(id, name, email, created_at);
        users.push(user.clone());

        debug!("Inserted user {} ({} total)", id, users.len());
        Ok(user)
    }

    async fn update(&self, id: u64, changes: &UserChanges) -> Result<User, DomainError> {
        let mut users = self.users.lock().await;

        let position = users
            .iter()
            .position(|u| u.id() == id)
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND_MESSAGE))?;

        if let Some(email) = changes.email() {
            if users.iter().any(|u| u.id() != id && u.has_email(email)) {
                return Err(DomainError::already_exists(EMAIL_EXISTS_MESSAGE));
            }
        }

        let user = &mut users[position];
        user.apply(changes);

        debug!("Updated user {}", id);
        Ok(user.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), DomainError> {
        let mut users = self.users.lock().await;

        let position = users
            .iter()
            .position(|u| u.id() == id)
            .ok_or_else(|| DomainError::not_found(USER_NOT_FOUND_MESSAGE))?;
        users.remove(position);

        debug!("Removed user {} ({} remaining)", id, users.len());
        Ok(())
    }
}

fn next_id(users: &[User]) -> u64 {
    users.iter().map(User::id).max().unwrap_or(0) + 1
}

fn seed_users() -> Vec<User> {
    let seeds = [
        (1, "John Doe", "john@example.com", (2024, 1, 15)),
        (2, "Jane Smith", "jane@example.com", (2024, 1, 16)),
    ];

    seeds
        .into_iter()
        .filter_map(|(id, name, email, (y, m, d))| {
            NaiveDate::from_ymd_opt(y, m, d)
                .map(|date| User::new(id, name.to_string(), email.to_string(), date))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn new_user(email: &str) -> NewUser {
        NewUser::try_new(Some("Test".to_string()), Some(email.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_seeded_registry() {
        let repo = InMemoryUserRepository::seeded();

        let users = repo.list().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name(), "John Doe");
        assert_eq!(users[1].created_at().to_string(), "2024-01-16");
    }

    #[tokio::test]
    async fn test_first_id_in_empty_registry_is_one() {
        let repo = InMemoryUserRepository::new();

        let user = repo.insert(new_user("a@example.com"), date()).await.unwrap();

        assert_eq!(user.id(), 1);
    }

    #[tokio::test]
    async fn test_max_id_is_reused_after_delete() {
        let repo = InMemoryUserRepository::seeded();
        let third = repo.insert(new_user("c@example.com"), date()).await.unwrap();
        assert_eq!(third.id(), 3);

        repo.delete(3).await.unwrap();
        let again = repo.insert(new_user("d@example.com"), date()).await.unwrap();

        assert_eq!(again.id(), 3);
    }

    #[tokio::test]
    async fn test_gap_below_max_is_not_filled() {
        let repo = InMemoryUserRepository::seeded();

        repo.delete(1).await.unwrap();
        let user = repo.insert(new_user("c@example.com"), date()).await.unwrap();

        assert_eq!(user.id(), 3);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::seeded();

        let err = repo
            .insert(new_user("jane@example.com"), date())
            .await
            .unwrap_err();

        assert!(err.is_already_exists());
        assert_eq!(err.message(), EMAIL_EXISTS_MESSAGE);
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn test_insert_email_check_is_case_sensitive() {
        let repo = InMemoryUserRepository::seeded();

        let user = repo.insert(new_user("JOHN@example.com"), date()).await.unwrap();

        assert_eq!(user.id(), 3);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryUserRepository::seeded();

        let err = repo.update(42, &UserChanges::default()).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let repo = InMemoryUserRepository::seeded();

        let err = repo.delete(42).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_inserts_get_distinct_ids() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert(new_user(&format!("user{}@example.com", i)), date())
                        .await
                        .unwrap()
                        .id()
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_inserts_of_same_email_admit_one() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.insert(new_user("same@example.com"), date()).await })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(repo.count().await, 1);
    }
}

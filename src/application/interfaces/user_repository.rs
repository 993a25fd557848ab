use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{DomainError, NewUser, User, UserChanges};

/// Owner of the user collection.
///
/// Every method is a single atomic step: implementations must perform the
/// lookup, uniqueness check and mutation under one critical section so that
/// concurrent callers never observe or produce a half-applied change.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError>;

    /// Assigns `max(id) + 1` and appends. Fails with `AlreadyExists` when the
    /// email is taken.
    async fn insert(&self, user: NewUser, created_at: NaiveDate) -> Result<User, DomainError>;

    /// Fails with `NotFound` for an unknown id and with `AlreadyExists` when
    /// the new email belongs to a different user.
    async fn update(&self, id: u64, changes: &UserChanges) -> Result<User, DomainError>;

    async fn delete(&self, id: u64) -> Result<(), DomainError>;
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::UserChanges;

/// A registered user. `id` and `created_at` are fixed once the registry
/// has accepted the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: u64,
    name: String,
    email: String,
    /// Serialized as `YYYY-MM-DD`.
    created_at: NaiveDate,
}

impl User {
    pub fn new(id: u64, name: String, email: String, created_at: NaiveDate) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }

    /// Overwrites the fields present in `changes`, leaving the rest untouched.
    pub fn apply(&mut self, changes: &UserChanges) {
        if let Some(name) = changes.name() {
            self.name = name.to_string();
        }
        if let Some(email) = changes.email() {
            self.email = email.to_string();
        }
    }

    pub fn summary(&self) -> String {
        format!("{} <{}> (#{})", self.name, self.email, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new(
            7,
            "John Doe".to_string(),
            "john@example.com".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut user = sample();

        user.apply(&UserChanges::new(None, Some("jd@example.com".to_string())));

        assert_eq!(user.id(), 7);
        assert_eq!(user.name(), "John Doe");
        assert_eq!(user.email(), "jd@example.com");
        assert_eq!(user.created_at(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_apply_empty_changes_is_noop() {
        let mut user = sample();

        user.apply(&UserChanges::default());

        assert_eq!(user, sample());
    }

    #[test]
    fn test_serializes_created_at_as_plain_date() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "John Doe",
                "email": "john@example.com",
                "created_at": "2024-01-15"
            })
        );
    }

    #[test]
    fn test_email_match_is_case_sensitive() {
        let user = sample();

        assert!(user.has_email("john@example.com"));
        assert!(!user.has_email("John@example.com"));
    }
}

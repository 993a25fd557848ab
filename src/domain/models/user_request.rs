use crate::domain::DomainError;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields: name and email";

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Both fields must be present. Empty strings are accepted.
    pub fn try_new(name: Option<String>, email: Option<String>) -> Result<Self, DomainError> {
        match (name, email) {
            (Some(name), Some(email)) => Ok(Self { name, email }),
            _ => Err(DomainError::invalid_input(MISSING_FIELDS_MESSAGE)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn into_parts(self) -> (String, String) {
        (self.name, self.email)
    }
}

/// A partial update. `None` means the field was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    name: Option<String>,
    email: Option<String>,
}

impl UserChanges {
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        Self { name, email }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

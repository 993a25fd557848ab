use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::AlreadyExists(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// The message without the variant prefix, as shown to API clients.
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(msg)
            | Self::AlreadyExists(msg)
            | Self::InvalidInput(msg) => msg,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_strips_variant_prefix() {
        let err = DomainError::not_found("User not found");

        assert_eq!(err.message(), "User not found");
        assert_eq!(err.to_string(), "Not found: User not found");
        assert!(err.is_not_found());
        assert!(!err.is_already_exists());
    }
}

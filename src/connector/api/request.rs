use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{DomainError, UserChanges};

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON data";
pub const NO_DATA_MESSAGE: &str = "No data provided";

/// Body of `POST /users`. Missing keys and `null` values both read as absent.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body of `PUT /users/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        UserChanges::new(request.name, request.email)
    }
}

/// Parses a JSON request body.
///
/// An empty body or a literal `null` yields `Ok(None)`. Anything that is not
/// a JSON object matching `T` is rejected as invalid input.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, DomainError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|_| DomainError::invalid_input(INVALID_JSON_MESSAGE))?;

    match value {
        Value::Null => Ok(None),
        Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(|_| DomainError::invalid_input(INVALID_JSON_MESSAGE)),
        _ => Err(DomainError::invalid_input(INVALID_JSON_MESSAGE)),
    }
}

/// Parses an update body; an absent body is an error rather than a no-op.
pub fn parse_changes(body: &[u8]) -> Result<UserChanges, DomainError> {
    parse_body::<UpdateUserRequest>(body)?
        .map(UserChanges::from)
        .ok_or_else(|| DomainError::invalid_input(NO_DATA_MESSAGE))
}

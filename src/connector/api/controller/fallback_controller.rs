use axum::http::Uri;

use super::super::error::ApiError;
use super::user_controller::parse_user_id;

pub async fn endpoint_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// `/users/{id}` only exists for integer ids, so a wrong method on any other
/// segment is an unknown endpoint rather than a disallowed method.
pub async fn method_not_allowed(uri: Uri) -> ApiError {
    match uri.path().strip_prefix("/users/") {
        Some(segment) if parse_user_id(segment).is_err() => ApiError::RouteNotFound,
        _ => ApiError::MethodNotAllowed,
    }
}

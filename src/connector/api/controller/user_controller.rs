//! Handlers for the `/users` resource.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::{DomainError, NewUser, User};

use super::super::error::ApiError;
use super::super::request::{parse_body, parse_changes, CreateUserRequest, INVALID_JSON_MESSAGE};
use super::super::response::Envelope;
use super::super::Container;

pub const USER_CREATED_MESSAGE: &str = "User created successfully";
pub const USER_UPDATED_MESSAGE: &str = "User updated successfully";
pub const USER_DELETED_MESSAGE: &str = "User deleted successfully";

type Shared = State<Arc<Container>>;
type IdSegment = Result<Path<String>, PathRejection>;
type Body = Result<Bytes, BytesRejection>;

pub async fn list_users(State(container): Shared) -> Result<Json<Envelope<Vec<User>>>, ApiError> {
    let users = container.list_use_case().execute().await?;
    Ok(Json(Envelope::list(users)))
}

pub async fn get_user(
    State(container): Shared,
    id: IdSegment,
) -> Result<Json<Envelope<User>>, ApiError> {
    let id = user_id(id)?;
    let user = container.get_use_case().execute(id).await?;
    Ok(Json(Envelope::data(user)))
}

pub async fn create_user(
    State(container): Shared,
    body: Body,
) -> Result<(StatusCode, Json<Envelope<User>>), ApiError> {
    let request = parse_body::<CreateUserRequest>(&buffered(body)?)?.unwrap_or_default();
    let new_user = NewUser::try_new(request.name, request.email)?;

    let user = container.create_use_case().execute(new_user).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data_with_message(USER_CREATED_MESSAGE, user)),
    ))
}

pub async fn update_user(
    State(container): Shared,
    id: IdSegment,
    body: Body,
) -> Result<Json<Envelope<User>>, ApiError> {
    let id = user_id(id)?;
    let changes = buffered(body).and_then(|bytes| parse_changes(&bytes));
    let user = container.update_use_case().execute(id, changes).await?;

    Ok(Json(Envelope::data_with_message(USER_UPDATED_MESSAGE, user)))
}

pub async fn delete_user(
    State(container): Shared,
    id: IdSegment,
) -> Result<Json<Envelope>, ApiError> {
    let id = user_id(id)?;
    container.delete_use_case().execute(id).await?;
    Ok(Json(Envelope::message(USER_DELETED_MESSAGE)))
}

/// A segment axum cannot decode is treated like any other non-integer id.
fn user_id(segment: IdSegment) -> Result<u64, ApiError> {
    let Path(segment) = segment.map_err(|_| ApiError::RouteNotFound)?;
    parse_user_id(&segment)
}

/// A body that cannot be buffered (too large, aborted) reads as malformed.
fn buffered(body: Body) -> Result<Bytes, DomainError> {
    body.map_err(|_| DomainError::invalid_input(INVALID_JSON_MESSAGE))
}

/// Only plain decimal digits name a user; anything else does not match the
/// route at all.
pub fn parse_user_id(segment: &str) -> Result<u64, ApiError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::RouteNotFound);
    }
    segment.parse().map_err(|_| ApiError::RouteNotFound)
}

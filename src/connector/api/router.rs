use std::sync::Arc;

use axum::middleware;
use axum::routing::get;
use axum::Router;

use super::container::Container;
use super::controller::{
    create_user, delete_user, endpoint_not_found, get_user, health_check, list_users,
    method_not_allowed, update_user,
};
use super::middleware::log_request;

/// Method and path of every route, in the order they are announced at startup.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/users", "Get all users"),
    ("GET", "/users/{id}", "Get user by ID"),
    ("POST", "/users", "Create new user"),
    ("PUT", "/users/{id}", "Update user"),
    ("DELETE", "/users/{id}", "Delete user"),
    ("GET", "/health", "Health check"),
];

pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/health", get(health_check))
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(log_request))
        .with_state(container)
}

pub mod fallback_controller;
pub mod health_controller;
pub mod user_controller;

pub use fallback_controller::{endpoint_not_found, method_not_allowed};
pub use health_controller::health_check;
pub use user_controller::{create_user, delete_user, get_user, list_users, update_user};

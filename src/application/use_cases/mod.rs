mod create_user;
mod delete_user;
mod get_user;
mod list_users;
mod update_user;

pub use create_user::*;
pub use delete_user::*;
pub use get_user::*;
pub use list_users::*;
pub use update_user::*;

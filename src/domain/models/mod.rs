mod user;
mod user_request;

pub use user::*;
pub use user_request::*;

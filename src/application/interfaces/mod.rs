mod clock;
mod user_repository;

pub use clock::*;
pub use user_repository::*;

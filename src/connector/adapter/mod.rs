mod clock;
mod in_memory_user_repository;

pub use clock::*;
pub use in_memory_user_repository::*;

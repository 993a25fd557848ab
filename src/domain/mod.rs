//! # Domain Layer
//!
//! User records, request models and the error taxonomy.
//! This layer is independent of the HTTP framework and of storage.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;

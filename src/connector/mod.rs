//! # Connector Layer
//!
//! Adapters implementing application interfaces and the HTTP API:
//! - Storage (in-memory user registry)
//! - Clocks (system date, fixed date for tests)
//! - API (axum router, handlers, response envelopes)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::{build_router, serve, Container, ContainerConfig, ServerConfig};

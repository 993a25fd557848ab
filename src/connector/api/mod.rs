pub mod config;
pub mod container;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod request;
pub mod response;
pub mod router;
pub mod server;
pub mod shutdown;

pub use config::ServerConfig;
pub use container::{Container, ContainerConfig};
pub use error::ApiError;
pub use router::build_router;
pub use server::serve;

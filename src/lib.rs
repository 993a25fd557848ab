pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    Clock, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
    UpdateUserUseCase, UserRepository,
};

pub use connector::{
    build_router, serve, Container, ContainerConfig, FixedClock, InMemoryUserRepository,
    ServerConfig, SystemClock,
};

pub use domain::{DomainError, NewUser, User, UserChanges};

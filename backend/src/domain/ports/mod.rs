//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports (`UserRepository`, `IdGenerator`) describe what the domain
//! needs from storage and identifier allocation. The driving port
//! (`UserService`) is what inbound adapters call. Each driven port exposes a
//! typed error enum so adapters map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod id_generator;
mod user_repository;
mod user_service;

#[cfg(test)]
pub use id_generator::MockIdGenerator;
pub use id_generator::{IdGenerator, IdGeneratorError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use user_service::MockUserService;
pub use user_service::UserService;

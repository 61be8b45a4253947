//! Persistence adapters for the user repository port.
//!
//! Two adapters are provided. [`InMemoryUserRepository`] keeps records in
//! process memory and needs no setup. [`DieselUserRepository`] stores them in
//! PostgreSQL through `diesel-async` with `bb8` pooling.
//!
//! Diesel row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! internal to this module; adapters only ever hand domain types back.
//!
//! # Example
//!
//! ```ignore
//! use user_service::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("postgres://localhost/users").await?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_user_repository;
mod in_memory_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use migrations::run_migrations;
pub use pool::{DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};

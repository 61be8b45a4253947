//! Domain primitives, ports, and services for user management.
//!
//! Purpose: hold the transport-agnostic core of the service. Types here never
//! depend on Actix or Diesel; inbound and outbound adapters translate to and
//! from them.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: the two-tier failure taxonomy (domain versus
//!   unexpected) surfaced to adapters.
//! - `User`, `UserId`, `UserDetails`: the persisted record and its parts.
//! - `UserInput` plus [`validated_details`]: the submitted payload and its check.
//! - `UserServiceImpl`: orchestration over the `UserRepository` port.
//! - `TraceId`: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserDetails, UserId, UserValidationError};
pub use self::user_service::UserServiceImpl;
pub use self::validation::{UserInput, validate, validated_details};

/// Header name used to expose the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

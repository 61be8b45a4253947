//! Port for allocating identifiers to new users.

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised while allocating identifiers.
    pub enum IdGeneratorError {
        /// The identifier space is used up.
        Exhausted { last: i64 } => "identifier space exhausted after {last}",
    }
}

/// Source of unique, strictly increasing user identifiers.
///
/// Implementations must be safe to call from many request handlers at once
/// and must never hand out the same value twice within a process.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Allocate the next identifier.
    fn next(&self) -> Result<UserId, IdGeneratorError>;
}

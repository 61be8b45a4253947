//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage port for user records.
///
/// Implementations decide their own ordering guarantees for
/// [`find_all`](Self::find_all); the bundled adapters return records in
/// ascending identifier order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every stored user.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert the user, or replace the record with the same identifier.
    async fn save(&self, user: &User) -> Result<User, UserPersistenceError>;

    /// Remove the record with the user's identifier. Removing an absent
    /// record succeeds without effect.
    async fn delete(&self, user: &User) -> Result<(), UserPersistenceError>;
}

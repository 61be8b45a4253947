//! Driving port used by inbound adapters to reach user storage.
//!
//! Handlers depend on this trait rather than on [`UserRepository`] so storage
//! stays behind the service seam.
//!
//! [`UserRepository`]: super::UserRepository

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Use-case port for listing, reading, saving, and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Every stored user, in store order.
    async fn list_all(&self) -> Result<Vec<User>, Error>;

    /// The user with `id`, or `None` when absent.
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, Error>;

    /// Insert or replace `user`, returning the stored record.
    async fn save(&self, user: User) -> Result<User, Error>;

    /// Remove `user` from storage.
    async fn delete(&self, user: &User) -> Result<(), Error>;
}

//! User service implementing the `UserService` driving port.
//!
//! The service adds no rules of its own. Each operation delegates to the
//! repository and folds persistence failures into the unexpected error tier.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository, UserService};
use crate::domain::{Error, User, UserId};

fn map_persistence_error(error: UserPersistenceError) -> Error {
    Error::unexpected(error.to_string())
}

/// Repository-backed [`UserService`].
pub struct UserServiceImpl<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserServiceImpl<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserServiceImpl<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UserService for UserServiceImpl<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_all(&self) -> Result<Vec<User>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(map_persistence_error)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }

    async fn save(&self, user: User) -> Result<User, Error> {
        self.repository
            .save(&user)
            .await
            .map_err(map_persistence_error)
    }

    async fn delete(&self, user: &User) -> Result<(), Error> {
        self.repository
            .delete(user)
            .await
            .map_err(map_persistence_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;

//! Process-local `UserRepository` used when no database is configured.
//!
//! Data lives only as long as the process.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

/// Map-backed repository keyed by identifier.
///
/// Iteration order of the underlying [`BTreeMap`] gives
/// [`find_all`](UserRepository::find_all) ascending identifier order.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `users`. Later duplicates replace earlier
    /// ones.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users.into_iter().map(|user| (user.id(), user)).collect();
        Self {
            users: RwLock::new(users),
        }
    }
}

fn poisoned() -> UserPersistenceError {
    UserPersistenceError::query("user store lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.get(&id).cloned())
    }

    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        users.insert(user.id(), user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        users.remove(&user.id());
        Ok(())
    }
}

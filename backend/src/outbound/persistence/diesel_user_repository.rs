//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Saves are upserts keyed on the identifier, so the same statement serves
//! create and update.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, |message| UserPersistenceError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        |message| UserPersistenceError::query(message),
        |message| UserPersistenceError::connection(message),
    )
}

/// Rows written outside the service may break the domain invariants.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow {
        id,
        name,
        email,
        profession,
    } = row;
    User::try_from_parts(id, name, email, profession).map_err(|err| {
        warn!(id, reason = %err, "stored user row violates invariants");
        UserPersistenceError::query(format!("invalid user row {id}: {err}"))
    })
}

fn new_row(user: &User) -> NewUserRow<'_> {
    NewUserRow {
        id: user.id().get(),
        name: user.name(),
        email: user.email(),
        profession: user.profession(),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .order(users::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.get()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn save(&self, user: &User) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(users::table)
            .values(&new_row(user))
            .on_conflict(users::id)
            .do_update()
            .set((
                users::name.eq(excluded(users::name)),
                users::email.eq(excluded(users::email)),
                users::profession.eq(excluded(users::profession)),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(user.clone())
    }

    async fn delete(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(users::table.filter(users::id.eq(user.id().get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn valid_rows_become_users() {
        let row = UserRow {
            id: 3,
            name: "Ann".to_owned(),
            email: "ann@x.com".to_owned(),
            profession: "Engineer".to_owned(),
        };

        let user = row_to_user(row).expect("valid row");
        assert_eq!(user.id(), UserId::new(3));
        assert_eq!(user.profession(), "Engineer");
    }

    #[rstest]
    fn blank_rows_map_to_query_errors() {
        let row = UserRow {
            id: 9,
            name: String::new(),
            email: "ann@x.com".to_owned(),
            profession: "Engineer".to_owned(),
        };

        let err = row_to_user(row).expect_err("blank name");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
        assert!(err.to_string().contains("invalid user row 9"));
    }

    #[rstest]
    fn new_rows_borrow_user_fields() {
        let user = User::try_from_parts(1, "Bo", "bo@x.com", "Chef").expect("valid user");
        let row = new_row(&user);
        assert_eq!((row.id, row.name, row.email, row.profession), (1, "Bo", "bo@x.com", "Chef"));
    }

    #[rstest]
    fn pool_failures_map_to_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, UserPersistenceError::connection("timed out"));
    }
}

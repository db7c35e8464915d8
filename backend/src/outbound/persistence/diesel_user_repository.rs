//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{PasswordHash, User, UserId, UserParts, Username};

use super::diesel_error_mapping::{Violation, map_diesel_error, map_pool_error, violation};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
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

fn diesel_to_user_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

/// Convert a database row into a domain user.
///
/// Rows written by this adapter always validate; anything else indicates
/// out-of-band edits and is reported as a query failure.
pub(super) fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let username = Username::new(&row.username).map_err(|err| {
        UserPersistenceError::query(format!("stored user {} is invalid: {err}", row.id))
    })?;
    Ok(User::new(UserParts {
        id: UserId::from_uuid(row.id),
        username,
        password_hash: PasswordHash::from_phc_string(row.password_hash),
        image_url: row.image_url,
        bio: row.bio,
    }))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let row = NewUserRow {
            id: *user.id().as_uuid(),
            username: user.username().as_ref(),
            password_hash: user.password_hash().as_phc_str(),
            image_url: user.image_url(),
            bio: user.bio(),
        };

        match diesel::insert_into(users::table)
            .values(&row)
            .execute(&mut conn)
            .await
        {
            Ok(_) => Ok(()),
            Err(err) if violation(&err) == Some(Violation::Unique) => {
                debug!(username = %user.username(), "unique violation on users.username");
                Err(UserPersistenceError::duplicate_username(
                    user.username().as_ref(),
                ))
            }
            Err(err) => Err(diesel_to_user_error(err)),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let row: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_to_user_error)?;

        row.map(row_to_user).transpose()
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserPersistenceError::connection))?;

        let row: Option<UserRow> = users::table
            .filter(users::username.eq(username))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_to_user_error)?;

        row.map(row_to_user).transpose()
    }
}

//! Account domain service.
//!
//! Implements the [`AccountService`] driving port on top of a
//! [`UserRepository`]. Password hashing and verification are CPU heavy, so
//! both run on the blocking thread pool.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{AccountService, UserPersistenceError, UserRepository};
use crate::domain::{
    Error, LoginCredentials, PasswordHash, PlainPassword, Registration, User, UserId, UserParts,
};

/// Message returned for any failed authentication.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
/// Message returned when signup hits a taken username.
pub const DUPLICATE_USERNAME_MESSAGE: &str = "Username already exists";

/// Map user repository failures onto domain errors.
pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateUsername { .. } => {
            Error::conflict(DUPLICATE_USERNAME_MESSAGE)
        }
    }
}

async fn hash_password(password: PlainPassword) -> Result<PasswordHash, Error> {
    tokio::task::spawn_blocking(move || PasswordHash::from_password(&password))
        .await
        .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
        .map_err(|err| Error::internal(err.to_string()))
}

async fn verify_password(hash: PasswordHash, password: PlainPassword) -> Result<bool, Error> {
    tokio::task::spawn_blocking(move || hash.verify(&password))
        .await
        .map_err(|err| Error::internal(format!("password verification task failed: {err}")))?
        .map_err(|err| Error::internal(err.to_string()))
}

/// Account service backed by a user repository.
#[derive(Clone)]
pub struct UserAccountService<U> {
    users: Arc<U>,
}

impl<U> UserAccountService<U> {
    /// Create a new service over `users`.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U> AccountService for UserAccountService<U>
where
    U: UserRepository,
{
    async fn sign_up(&self, registration: Registration) -> Result<User, Error> {
        let (username, password, image_url, bio) = registration.into_parts();
        let password_hash = hash_password(password).await?;
        let user = User::new(UserParts {
            id: UserId::random(),
            username,
            password_hash,
            image_url,
            bio,
        });

        self.users.insert(&user).await.map_err(|err| {
            if matches!(err, UserPersistenceError::DuplicateUsername { .. }) {
                info!(username = %user.username(), "signup rejected: username taken");
            }
            map_user_persistence_error(err)
        })?;

        info!(user_id = %user.id(), "user signed up");
        Ok(user)
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let Some(user) = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_user_persistence_error)?
        else {
            warn!("login rejected: unknown username");
            return Err(Error::unauthorized(UNAUTHORIZED_MESSAGE));
        };

        let matched =
            verify_password(user.password_hash().clone(), credentials.password().clone()).await?;
        if !matched {
            warn!(user_id = %user.id(), "login rejected: password mismatch");
            return Err(Error::unauthorized(UNAUTHORIZED_MESSAGE));
        }
        Ok(user)
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(map_user_persistence_error)
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;

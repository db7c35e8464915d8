//! Driving port for signup, login, and session lookups.
//!
//! Inbound adapters call this port without knowing the backing
//! infrastructure, so HTTP handler tests can substitute a mock.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Registration, User, UserId};

/// Domain use-case port for account management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Register a new account. A taken username yields a conflict error.
    async fn sign_up(&self, registration: Registration) -> Result<User, Error>;

    /// Validate credentials and return the matching user.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;

    /// Look up the user behind a session.
    async fn find_user(&self, id: &UserId) -> Result<Option<User>, Error>;
}

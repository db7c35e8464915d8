//! Authentication primitives: login credentials and signup registrations.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use super::user::{UserValidationError, Username, profile_field};
use super::PlainPassword;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ada ", "pw").unwrap();
/// assert_eq!(creds.username(), "ada");
/// assert_eq!(creds.password().expose(), "pw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: PlainPassword,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: PlainPassword::new(password),
        })
    }

    /// Username string suitable for user lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &PlainPassword {
        &self.password
    }
}

/// Validation errors for signup payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationValidationError {
    #[error(transparent)]
    User(#[from] UserValidationError),
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated signup request.
///
/// Checks run in field order and the first failure wins: username, then
/// password, then the optional profile fields.
#[derive(Debug, Clone)]
pub struct Registration {
    username: Username,
    password: PlainPassword,
    image_url: Option<String>,
    bio: Option<String>,
}

impl Registration {
    /// Validate raw signup input, reporting the first failing field.
    ///
    /// The username is trimmed before its length is checked. Optional
    /// profile fields must fit their columns.
    pub fn try_from_parts(
        username: &str,
        password: &str,
        image_url: Option<String>,
        bio: Option<String>,
    ) -> Result<Self, RegistrationValidationError> {
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(RegistrationValidationError::EmptyPassword);
        }
        let image_url = profile_field("image_url", image_url)?;
        let bio = profile_field("bio", bio)?;
        Ok(Self {
            username,
            password: PlainPassword::new(password),
            image_url,
            bio,
        })
    }

    /// Validated username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Plaintext password, zeroed on drop.
    pub fn password(&self) -> &PlainPassword {
        &self.password
    }

    /// Optional avatar URL.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Optional free-text biography.
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Split into owned parts for persistence.
    pub fn into_parts(self) -> (Username, PlainPassword, Option<String>, Option<String>) {
        (self.username, self.password, self.image_url, self.bio)
    }
}

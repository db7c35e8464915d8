//! User data model.
//!
//! A [`User`] owns its password hash, so it deliberately does not implement
//! `Serialize`. Responses use [`UserProfile`], which carries only the public
//! fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::PasswordHash;

/// Maximum username length in characters, matching the `users.username` column.
pub const USERNAME_MAX: usize = 80;
/// Maximum length for `image_url` and `bio`, matching their columns.
pub const PROFILE_FIELD_MAX: usize = 255;

/// Validation errors returned by user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    #[error("user id must not be empty")]
    EmptyId,
    #[error("user id must be a valid UUID")]
    InvalidId,
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("username must be at most {max} characters")]
    UsernameTooLong { max: usize },
    #[error("{field} must be at most {max} characters")]
    ProfileFieldTooLong { field: &'static str, max: usize },
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a UUID read from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unique login name.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace.
/// - Non-empty and at most [`USERNAME_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Trim and validate a username.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Username;
    ///
    /// let name = Username::new("  ada  ").unwrap();
    /// assert_eq!(name.as_ref(), "ada");
    /// assert!(Username::new("   ").is_err());
    /// ```
    pub fn new(username: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = username.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if trimmed.chars().count() > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate an optional free-text profile field against its column width.
pub(crate) fn profile_field(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, UserValidationError> {
    match value {
        Some(text) if text.chars().count() > PROFILE_FIELD_MAX => {
            Err(UserValidationError::ProfileFieldTooLong {
                field,
                max: PROFILE_FIELD_MAX,
            })
        }
        other => Ok(other),
    }
}

/// Registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    password_hash: PasswordHash,
    image_url: Option<String>,
    bio: Option<String>,
}

/// Field bundle for [`User::new`].
#[derive(Debug, Clone)]
pub struct UserParts {
    pub id: UserId,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl User {
    /// Assemble a user from validated parts.
    pub fn new(parts: UserParts) -> Self {
        let UserParts {
            id,
            username,
            password_hash,
            image_url,
            bio,
        } = parts;
        Self {
            id,
            username,
            password_hash,
            image_url,
            bio,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Stored password hash. Never include this in a response.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Public fields safe to return to clients.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.to_string(),
            image_url: self.image_url.clone(),
            bio: self.bio.clone(),
        }
    }
}

/// Public view of a user returned by signup, login, and session checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: UserId,
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "https://example.com/ada.png")]
    pub image_url: Option<String>,
    #[schema(example = "Collector of analytical engine recipes.")]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests;

//! Password primitives: plaintext input and salted Argon2id hashes.
//!
//! Plaintext passwords are zeroised on drop. Hashes are stored as PHC
//! strings (`$argon2id$v=19$...`) so the algorithm parameters and salt travel
//! with the hash. Neither type implements `Serialize`.

use std::fmt;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Argon2, password_hash};
use zeroize::Zeroizing;

/// Errors raised while hashing or verifying passwords.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHashError {
    /// Hashing failed inside the Argon2 implementation.
    #[error("password hashing failed: {message}")]
    Hashing { message: String },
    /// A stored hash could not be parsed as a PHC string.
    #[error("stored password hash is malformed: {message}")]
    Malformed { message: String },
}

/// Plaintext password supplied by a client.
///
/// The inner buffer is wiped when the value is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(Zeroizing<String>);

impl PlainPassword {
    /// Wrap a caller-provided password without altering whitespace.
    pub fn new(password: impl Into<String>) -> Self {
        Self(Zeroizing::new(password.into()))
    }

    /// Borrow the password.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the password is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword(<redacted>)")
    }
}

/// Salted Argon2id password hash in PHC string format.
///
/// # Examples
/// ```
/// use backend::domain::{PasswordHash, PlainPassword};
///
/// let hash = PasswordHash::from_password(&PlainPassword::new("s3cret")).unwrap();
/// assert!(hash.verify(&PlainPassword::new("s3cret")).unwrap());
/// assert!(!hash.verify(&PlainPassword::new("guess")).unwrap());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash `password` with a fresh random salt.
    pub fn from_password(password: &PlainPassword) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|err| PasswordHashError::Hashing {
                message: err.to_string(),
            })?;
        Ok(Self(hash.to_string()))
    }

    /// Rehydrate a hash read from storage. The string is parsed lazily on
    /// verification.
    pub fn from_phc_string(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    /// Check `password` against this hash.
    ///
    /// Returns `Ok(false)` on mismatch and an error only when the stored hash
    /// cannot be parsed.
    pub fn verify(&self, password: &PlainPassword) -> Result<bool, PasswordHashError> {
        let parsed =
            password_hash::PasswordHash::new(&self.0).map_err(|err| PasswordHashError::Malformed {
                message: err.to_string(),
            })?;
        Ok(Argon2::default()
            .verify_password(password.expose().as_bytes(), &parsed)
            .is_ok())
    }

    /// The PHC string for persistence adapters.
    pub fn as_phc_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn hashes_are_salted() {
        let password = PlainPassword::new("correct horse battery staple");
        let first = PasswordHash::from_password(&password).expect("hash");
        let second = PasswordHash::from_password(&password).expect("hash");
        assert_ne!(first.as_phc_str(), second.as_phc_str());
        assert!(first.as_phc_str().starts_with("$argon2id$"));
    }

    #[rstest]
    #[case("hunter2", true)]
    #[case("hunter3", false)]
    #[case("", false)]
    #[case(" hunter2", false)]
    fn verify_compares_exact_password(#[case] attempt: &str, #[case] expected: bool) {
        let hash = PasswordHash::from_password(&PlainPassword::new("hunter2")).expect("hash");
        let matched = hash.verify(&PlainPassword::new(attempt)).expect("verify");
        assert_eq!(matched, expected);
    }

    #[rstest]
    fn malformed_hash_is_an_error() {
        let hash = PasswordHash::from_phc_string("not-a-phc-string");
        let result = hash.verify(&PlainPassword::new("anything"));
        assert!(matches!(result, Err(PasswordHashError::Malformed { .. })));
    }

    #[rstest]
    fn debug_output_is_redacted() {
        let password = PlainPassword::new("hunter2");
        let hash = PasswordHash::from_password(&password).expect("hash");
        assert!(!format!("{password:?}").contains("hunter2"));
        assert!(!format!("{hash:?}").contains("argon2"));
    }
}

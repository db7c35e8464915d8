//! Session cookie configuration read from the environment.
//!
//! | Variable | Meaning | Debug default | Release |
//! |---|---|---|---|
//! | `SESSION_KEY_FILE` | path to key material | `/var/run/secrets/session_key` | same |
//! | `SESSION_COOKIE_SECURE` | mark cookie `Secure` | `true` (warns) | required |
//! | `SESSION_SAMESITE` | `Strict`, `Lax`, or `None` | `Lax` (warns) | required |
//! | `SESSION_ALLOW_EPHEMERAL` | fall back to a random key | `false` (warns) | must be `0` |
//!
//! Debug builds log a warning and fall back; release builds fail fast.

mod parsing;

use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

use parsing::{bool_var, or_fallback, same_site_var};

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
/// Minimum key length accepted in release builds.
pub const SESSION_KEY_MIN_LEN: usize = 64;
pub(crate) const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
pub(crate) const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
pub(crate) const SAMESITE_ENV: &str = "SESSION_SAMESITE";
pub(crate) const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";

/// Build mode for session configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Tolerate missing or invalid toggles with warnings.
    Debug,
    /// Require explicit, valid toggles.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Validated cookie session settings.
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    pub cookie_secure: bool,
    pub same_site: SameSite,
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    #[error("SESSION_SAMESITE=None requires SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Build session settings from environment variables and build mode.
///
/// # Examples
///
/// ```rust
/// use backend::inbound::http::session_config::{BuildMode, session_settings_from_env};
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|_| None);
///
/// // Debug builds fall back to secure, Lax cookies and an ephemeral key.
/// let settings = session_settings_from_env(&env, BuildMode::Debug).unwrap();
/// assert!(settings.cookie_secure);
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let cookie_secure = bool_var(env, mode, COOKIE_SECURE_ENV, true)?;
    let same_site = same_site_var(env, mode, cookie_secure)?;
    let allow_ephemeral = bool_var(env, mode, ALLOW_EPHEMERAL_ENV, false)?;
    if allow_ephemeral && !mode.is_debug() {
        return Err(SessionConfigError::EphemeralNotAllowed);
    }
    let key = load_key(env, mode, allow_ephemeral)?;

    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

fn load_key<E: Env>(env: &E, mode: BuildMode, allow_ephemeral: bool) -> Result<Key, SessionConfigError> {
    let path = PathBuf::from(
        env.string(KEY_FILE_ENV)
            .unwrap_or_else(|| SESSION_KEY_DEFAULT_PATH.to_owned()),
    );

    let mut bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(source) => {
            return or_fallback(
                if allow_ephemeral {
                    BuildMode::Debug
                } else {
                    mode
                },
                Key::generate,
                SessionConfigError::KeyRead {
                    path: path.clone(),
                    source,
                },
                || warn!(path = %path.display(), "session key unreadable; using a temporary key"),
            );
        }
    };

    let length = bytes.len();
    if length < SESSION_KEY_MIN_LEN {
        bytes.zeroize();
        return or_fallback(
            mode,
            Key::generate,
            SessionConfigError::KeyTooShort {
                path: path.clone(),
                length,
                min_len: SESSION_KEY_MIN_LEN,
            },
            || warn!(path = %path.display(), length, "session key too short; using a temporary key"),
        );
    }
    let key = Key::derive_from(&bytes);
    bytes.zeroize();
    Ok(key)
}

#[cfg(test)]
mod tests;

//! Environment value parsing for session configuration.

use actix_web::cookie::SameSite;
use mockable::Env;
use tracing::warn;

use super::{BuildMode, SAMESITE_ENV, SessionConfigError};

const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// Return `fallback()` after `warn_fn` in debug mode, `error` otherwise.
pub(super) fn or_fallback<T>(
    mode: BuildMode,
    fallback: impl FnOnce() -> T,
    error: SessionConfigError,
    warn_fn: impl FnOnce(),
) -> Result<T, SessionConfigError> {
    if mode.is_debug() {
        warn_fn();
        Ok(fallback())
    } else {
        Err(error)
    }
}

pub(super) fn bool_var<E: Env>(
    env: &E,
    mode: BuildMode,
    name: &'static str,
    default_value: bool,
) -> Result<bool, SessionConfigError> {
    let Some(value) = env.string(name) else {
        return or_fallback(
            mode,
            || default_value,
            SessionConfigError::MissingEnv { name },
            || warn!("{name} not set; defaulting to {default_value}"),
        );
    };
    match parse_bool(&value) {
        Some(flag) => Ok(flag),
        None => or_fallback(
            mode,
            || default_value,
            SessionConfigError::InvalidEnv {
                name,
                value: value.clone(),
                expected: BOOL_EXPECTED,
            },
            || warn!(value = %value, "invalid {name}; defaulting to {default_value}"),
        ),
    }
}

pub(super) fn same_site_var<E: Env>(
    env: &E,
    mode: BuildMode,
    cookie_secure: bool,
) -> Result<SameSite, SessionConfigError> {
    let default_same_site = if mode.is_debug() {
        SameSite::Lax
    } else {
        SameSite::Strict
    };
    let Some(value) = env.string(SAMESITE_ENV) else {
        return or_fallback(
            mode,
            || default_same_site,
            SessionConfigError::MissingEnv { name: SAMESITE_ENV },
            || warn!("SESSION_SAMESITE not set; using default"),
        );
    };

    match value.to_ascii_lowercase().as_str() {
        "lax" => Ok(SameSite::Lax),
        "strict" => Ok(SameSite::Strict),
        "none" if cookie_secure => Ok(SameSite::None),
        "none" => or_fallback(
            mode,
            || SameSite::None,
            SessionConfigError::InsecureSameSiteNone,
            || warn!("SESSION_SAMESITE=None without a secure cookie; browsers may reject it"),
        ),
        _ => or_fallback(
            mode,
            || default_same_site,
            SessionConfigError::InvalidEnv {
                name: SAMESITE_ENV,
                value: value.clone(),
                expected: SAMESITE_EXPECTED,
            },
            || warn!(value = %value, "invalid SESSION_SAMESITE; using default"),
        ),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

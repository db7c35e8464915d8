//! Process settings loaded via OrthoConfig from CLI flags, `RECIPES_*`
//! environment variables, and configuration files.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Longest accepted session lifetime: one year.
pub const SESSION_TTL_MAX_HOURS: i64 = 24 * 365;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("session TTL must be between 1 and {max} hours, got {hours}")]
    InvalidSessionTtl { hours: i64, max: i64 },
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECIPES")]
pub struct ServerSettings {
    /// Socket address to listen on.
    #[ortho_config(default = "0.0.0.0:8080".to_owned())]
    pub bind_addr: String,
    /// PostgreSQL URL. Without one the server keeps data in memory.
    pub database_url: Option<String>,
    /// Lifetime of a session cookie in hours.
    #[ortho_config(default = 2)]
    pub session_ttl_hours: i64,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

impl ServerSettings {
    /// Parse the configured listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: self.bind_addr.clone(),
                source,
            })
    }

    /// Database URL, treating a blank value as absent.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Session lifetime, bounded to `1..=`[`SESSION_TTL_MAX_HOURS`].
    pub fn session_ttl_hours(&self) -> Result<i64, SettingsError> {
        if (1..=SESSION_TTL_MAX_HOURS).contains(&self.session_ttl_hours) {
            Ok(self.session_ttl_hours)
        } else {
            Err(SettingsError::InvalidSessionTtl {
                hours: self.session_ttl_hours,
                max: SESSION_TTL_MAX_HOURS,
            })
        }
    }

    /// Pool size, never below one connection.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.max(1)
    }
}

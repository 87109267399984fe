//! Startup configuration.
//!
//! Credentials are resolved from the environment exactly once, in `main`,
//! and handed to the fetcher as a plain struct. Request logic never reads
//! the environment, so tests can inject fake credentials deterministically.

use thiserror::Error;

/// Primary API key variable. Takes precedence over [`FALLBACK_KEY_ENV`].
pub const PRIMARY_KEY_ENV: &str = "RASOI_API_KEY";

/// Alternate name for the primary API key, checked second.
pub const FALLBACK_KEY_ENV: &str = "GEMINI_API_KEY";

/// Optional backup API key, tried once if the primary key fails.
pub const BACKUP_KEY_ENV: &str = "RASOI_BACKUP_API_KEY";

/// Configuration errors that prevent the app from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no API key configured: set {PRIMARY_KEY_ENV} (or {FALLBACK_KEY_ENV})")]
    MissingApiKey,
}

/// Resolved API credentials, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The primary API key. Always present.
    pub primary: String,
    /// Optional backup key, used for a single fallback attempt.
    pub backup: Option<String>,
}

impl Credentials {
    /// Creates credentials from explicit values (used by tests and anywhere
    /// the environment is not the source of truth).
    #[must_use]
    pub fn new(primary: impl Into<String>, backup: Option<String>) -> Self {
        Self {
            primary: primary.into(),
            backup,
        }
    }

    /// Resolves credentials from the environment.
    ///
    /// [`PRIMARY_KEY_ENV`] takes precedence over [`FALLBACK_KEY_ENV`];
    /// [`BACKUP_KEY_ENV`] is optional. Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when neither primary variable
    /// is set, which is fatal: the app cannot serve any request without it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let primary = read_env(PRIMARY_KEY_ENV)
            .or_else(|| read_env(FALLBACK_KEY_ENV))
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            primary,
            backup: read_env(BACKUP_KEY_ENV),
        })
    }

    /// Returns the keys to try, in priority order.
    #[must_use]
    pub fn key_chain(&self) -> Vec<&str> {
        let mut keys = vec![self.primary.as_str()];
        if let Some(backup) = &self.backup {
            keys.push(backup.as_str());
        }
        keys
    }
}

/// Reads an environment variable, treating empty strings as unset.
fn read_env(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

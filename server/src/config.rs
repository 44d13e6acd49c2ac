//! Environment-driven configuration.
//!
//! DESIGN
//! ======
//! A single backend-facing value, `BACKEND_API_URL`, drives every upstream
//! call (proxy and SSR loaders read the same variable). Everything else has
//! a sensible default so a bare `BACKEND_API_URL=... cargo run` works.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("invalid {0}: {1}")]
    Invalid(&'static str, String),
}

/// Server configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Port to bind the HTTP listener on.
    pub port: u16,
    /// Base URL of the external booking backend, without a trailing slash.
    pub backend_api_url: String,
}

impl Config {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when `BACKEND_API_URL` is missing or `PORT` is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_api_url = lookup("BACKEND_API_URL")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing("BACKEND_API_URL"))?;

        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|error: std::num::ParseIntError| ConfigError::Invalid("PORT", error.to_string()))?,
        };

        Ok(Self { port, backend_api_url })
    }
}

use std::{net::SocketAddr, str::FromStr};

use dioxus_logger::tracing::Level;

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
static DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Server configuration loaded from environment variables.
///
/// # Environment Variables
/// - `DATABASE_URL` (required) - Connection string for Postgres or SQLite
/// - `BIND_ADDRESS` (default `0.0.0.0:8080`) - Socket address the HTTP server listens on
/// - `LOG_LEVEL` (default `info`) - One of `trace`, `debug`, `info`, `warn`, `error`
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads configuration using `lookup` to resolve each variable.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is absent
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is present but could not be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingEnvVar("DATABASE_URL"))?;

        let bind_address = match lookup("BIND_ADDRESS") {
            Some(address) => parse_var("BIND_ADDRESS", &address)?,
            None => parse_var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => parse_var("LOG_LEVEL", &level)?,
            None => DEFAULT_LOG_LEVEL,
        };

        Ok(Self {
            database_url,
            bind_address,
            log_level,
        })
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var,
            reason: e.to_string(),
        })
}

//! Configuration management for the profile form.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

const DEFAULT_PERSIST_DELAY_MS: u64 = 1500;
const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 3000;

/// Configuration for the profile form.
#[derive(Debug, Clone)]
pub struct Config {
    /// Delay of the simulated persist call (default: 1500ms)
    pub persist_delay: Duration,

    /// How long the success state is shown before the form resets (default: 3000ms)
    pub success_display: Duration,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PROFILE_PERSIST_DELAY_MS`: simulated persist delay (default: 1500)
    /// - `PROFILE_SUCCESS_DISPLAY_MS`: success window before reset (default: 3000)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; a malformed one is not.
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let persist_delay_ms =
            Self::parse_env_u64("PROFILE_PERSIST_DELAY_MS", DEFAULT_PERSIST_DELAY_MS)?;
        let success_display_ms =
            Self::parse_env_u64("PROFILE_SUCCESS_DISPLAY_MS", DEFAULT_SUCCESS_DISPLAY_MS)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            persist_delay: Duration::from_millis(persist_delay_ms),
            success_display: Duration::from_millis(success_display_ms),
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            persist_delay: Duration::from_millis(DEFAULT_PERSIST_DELAY_MS),
            success_display: Duration::from_millis(DEFAULT_SUCCESS_DISPLAY_MS),
            log_level: "error".to_string(),
        }
    }
}

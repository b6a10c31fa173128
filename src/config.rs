// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the activities API (the page's origin)
    pub api_base_url: String,
    /// How long signup outcome messages stay visible
    pub signup_message_delay: Duration,
    /// How long removal outcome messages stay visible
    pub removal_message_delay: Duration,
    /// Per-request timeout
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            signup_message_delay: Duration::from_millis(5000),
            removal_message_delay: Duration::from_millis(4000),
            http_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        Ok(Self {
            api_base_url: env::var("SIGNUP_API_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            signup_message_delay: duration_var("SIGNUP_MESSAGE_MS", Duration::from_millis)?
                .unwrap_or(defaults.signup_message_delay),
            removal_message_delay: duration_var("REMOVAL_MESSAGE_MS", Duration::from_millis)?
                .unwrap_or(defaults.removal_message_delay),
            http_timeout: duration_var("HTTP_TIMEOUT_SECS", Duration::from_secs)?
                .unwrap_or(defaults.http_timeout),
        })
    }
}

/// Read an optional numeric variable and turn it into a duration.
fn duration_var(
    name: &'static str,
    unit: fn(u64) -> Duration,
) -> Result<Option<Duration>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|v| Some(unit(v)))
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

//! Configuration management for the customer form.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default base URL of the lookup API.
pub const DEFAULT_LOOKUP_API_URL: &str = "https://lab.pixel6.co/api";

/// Default key under which the customer list is stored.
pub const DEFAULT_STORE_KEY: &str = "customers";

/// Configuration for the customer form.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lookup API base URL
    pub lookup_api_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Directory holding the file-backed store (default: "./data")
    pub data_dir: PathBuf,

    /// Key of the customer list inside the store (default: "customers")
    pub store_key: String,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `LOOKUP_API_BASE_URL`: Base URL for the lookup API
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `CUSTOMER_DATA_DIR`: Store directory (default: "./data")
    /// - `CUSTOMER_STORE_KEY`: Store key for the customer list (default: "customers")
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let lookup_api_url = env::var("LOOKUP_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_LOOKUP_API_URL.to_string());

        if !lookup_api_url.starts_with("http://") && !lookup_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "LOOKUP_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let data_dir = env::var("CUSTOMER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let store_key =
            env::var("CUSTOMER_STORE_KEY").unwrap_or_else(|_| DEFAULT_STORE_KEY.to_string());
        if store_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CUSTOMER_STORE_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            lookup_api_url,
            request_timeout,
            data_dir,
            store_key,
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
            lookup_api_url: DEFAULT_LOOKUP_API_URL.to_string(),
            request_timeout: 10,
            data_dir: PathBuf::from("data"),
            store_key: DEFAULT_STORE_KEY.to_string(),
            log_level: "info".to_string(),
        }
    }
}

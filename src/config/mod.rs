// src/config/mod.rs
// All values come from the environment (plus an optional .env file), with
// working defaults for the hosted backend.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct WarunginConfig {
    /// Origin of the backend REST API.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout: u64,
    /// Explicit path for the persisted session file. When unset the
    /// platform data directory is used.
    pub session_file: Option<String>,
    pub log_level: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => val.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

impl WarunginConfig {
    pub fn from_env() -> Self {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();

        Self {
            api_url: env_var_or(
                "WARUNGIN_API_URL",
                "https://warungin-backend.onrender.com".to_string(),
            ),
            request_timeout: env_var_or("WARUNGIN_REQUEST_TIMEOUT", 30),
            session_file: std::env::var("WARUNGIN_SESSION_FILE").ok(),
            log_level: env_var_or("WARUNGIN_LOG_LEVEL", "info".to_string()),
        }
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<WarunginConfig> = Lazy::new(WarunginConfig::from_env);

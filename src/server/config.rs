use std::collections::HashMap;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Username to password pairs accepted by the authentication gate.
    pub api_users: HashMap<String, String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let api_users = std::env::var("API_USERS")
            .map_err(|_| ConfigError::MissingEnvVar("API_USERS".to_string()))?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            api_users: parse_api_users(&api_users)?,
        })
    }
}

/// Parses `API_USERS` in the form `alice:secret,bob:hunter2`.
///
/// Whitespace around entries is ignored. Passwords may contain `:`, only the first
/// one separates the username.
///
/// # Returns
/// - `Ok(HashMap)` - At least one username to password pair
/// - `Err(ConfigError::InvalidEnvVar)` - An entry lacks a separator, has an empty
///   username, or the variable holds no entries at all
pub fn parse_api_users(value: &str) -> Result<HashMap<String, String>, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "API_USERS".to_string(),
        reason: reason.to_string(),
    };

    let mut users = HashMap::new();
    for entry in value.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (username, password) = entry
            .split_once(':')
            .ok_or_else(|| invalid("expected entries of the form username:password"))?;

        if username.is_empty() {
            return Err(invalid("username must not be empty"));
        }

        users.insert(username.to_string(), password.to_string());
    }

    if users.is_empty() {
        return Err(invalid("at least one user is required"));
    }

    Ok(users)
}

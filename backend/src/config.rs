use std::path::PathBuf;

use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::get_create_app_root;
use crate::logger::Level;

pub const DEFAULT_POOL_SIZE: u32 = 5;
pub const DEFAULT_DB_FILE_NAME: &str = "pricing.sqlite3";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid DB_POOL_SIZE '{0}': expected a positive integer")]
    InvalidPoolSize(String),
    #[error("invalid LOG_LEVEL '{0}': expected one of silent, error, warn, info, debug")]
    InvalidLogLevel(String),
    #[error("can't determine the application data directory: {0}")]
    AppRoot(String),
}

/// Settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub pool_size: u32,
    pub log_level: Level,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, which returns the value of a variable
    /// or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL").filter(|s| !s.is_empty()) {
            Some(url) => url,
            None => {
                let root = get_create_app_root().map_err(|e| ConfigError::AppRoot(e.to_string()))?;
                root.join(DEFAULT_DB_FILE_NAME).to_string_lossy().into_owned()
            }
        };

        let pool_size = match lookup("DB_POOL_SIZE") {
            Some(s) => match s.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidPoolSize(s)),
            },
            None => DEFAULT_POOL_SIZE,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(s) => Level::parse(&s).ok_or(ConfigError::InvalidLogLevel(s))?,
            None => Level::Info,
        };

        let log_file = lookup("LOG_FILE").filter(|s| !s.is_empty()).map(PathBuf::from);

        Ok(AppConfig {
            database_url,
            pool_size,
            log_level,
            log_file,
        })
    }

    pub fn in_memory() -> Self {
        AppConfig {
            database_url: ":memory:".to_string(),
            pool_size: 1,
            log_level: Level::Info,
            log_file: None,
        }
    }
}

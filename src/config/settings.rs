//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_DATA_DIRECTORY, ENV_DATA_DIRECTORY};
use crate::errors::{AppError, AppResult};

/// Source of the configured base data directory.
///
/// Injected explicitly into the resolver at construction time instead of being
/// looked up from an ambient registry, so tests can substitute their own.
pub trait ConfigProvider: Send + Sync {
    /// The base directory under which all user storage roots live.
    ///
    /// Implementations must return an error rather than an empty or guessed
    /// value when the directory cannot be determined.
    fn data_directory(&self) -> AppResult<String>;
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    data_directory: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Falls back to [`DEFAULT_DATA_DIRECTORY`] when `DATA_DIRECTORY` is
    /// unset. An explicitly empty value is kept and rejected at query time.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_directory = env::var(ENV_DATA_DIRECTORY).unwrap_or_else(|_| {
            tracing::debug!(
                "{} not set, using default {}",
                ENV_DATA_DIRECTORY,
                DEFAULT_DATA_DIRECTORY
            );
            DEFAULT_DATA_DIRECTORY.to_string()
        });

        Self { data_directory }
    }

    /// Build a configuration with an explicit base directory (tests, embedding).
    pub fn with_data_directory(data_directory: impl Into<String>) -> Self {
        Self {
            data_directory: data_directory.into(),
        }
    }
}

impl ConfigProvider for Config {
    fn data_directory(&self) -> AppResult<String> {
        if self.data_directory.is_empty() {
            return Err(AppError::configuration(format!(
                "{} is set but empty",
                ENV_DATA_DIRECTORY
            )));
        }
        Ok(self.data_directory.clone())
    }
}

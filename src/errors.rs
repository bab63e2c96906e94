//! Centralized error handling.
//!
//! Provides a unified error type for the crate. An unknown user is not an
//! error: lookups surface it as `Ok(None)` and callers treat the account as
//! having no storage.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The base data directory could not be determined.
    ///
    /// Not locally recoverable; the resolver never substitutes its own
    /// hardcoded path when configuration fails.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The user-existence lookup itself failed.
    ///
    /// Distinct from a negative answer, which is a normal result.
    #[error("user directory error: {0}")]
    Directory(String),
}

impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn directory(msg: impl Into<String>) -> Self {
        AppError::Directory(msg.into())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

//! Application error types
//!
//! Errors raised while starting and running the server process. Request-level
//! failures are handled by the service and API layers.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get error code for logs and exit reporting
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

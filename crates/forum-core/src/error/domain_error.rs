//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    InvalidArgument(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

impl DomainError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::CorruptRecord(_) => "CORRUPT_RECORD",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this error came from the storage layer
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_) | Self::CorruptRecord(_))
    }
}

//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use forum_core::DomainError;
use std::fmt;
use std::time::Duration;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or storage failure
    Domain(DomainError),

    /// Storage did not answer within the operation timeout
    Timeout {
        operation: &'static str,
        after: Duration,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Timeout { operation, after } => {
                write!(f, "{operation} timed out after {}ms", after.as_millis())
            }
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Timeout { .. } => None,
        }
    }
}

impl ServiceError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::Domain(DomainError::invalid_argument(msg))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_validation() {
                    400
                } else {
                    500
                }
            }
            Self::Timeout { .. } => 503,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Timeout { .. } => "TIMEOUT",
        }
    }

    /// Whether the caller sent something the ledger cannot accept
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

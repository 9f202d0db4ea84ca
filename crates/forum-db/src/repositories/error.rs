//! Error handling utilities for repositories

use forum_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Every driver, pool, and transaction failure surfaces as `StorageUnavailable`;
/// callers never see a partially applied write because the transaction is
/// rolled back when dropped.
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StorageUnavailable(e.to_string())
}

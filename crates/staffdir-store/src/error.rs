//! Error types for the storage layer.

use staffdir_core::{EmployeeId, OrgId};
use thiserror::Error;

/// A result type using `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write tried to move an existing record to another organization.
    #[error("employee {employee_id} belongs to {existing}, not {requested}")]
    OrgMismatch {
        /// The record being written.
        employee_id: EmployeeId,
        /// The organization the record already belongs to.
        existing: OrgId,
        /// The organization named by the write.
        requested: OrgId,
    },

    /// A record could not be built from raw values.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] staffdir_core::CoreError),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

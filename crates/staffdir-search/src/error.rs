//! Error types for directory search.
//!
//! This module defines all errors that can occur while validating and
//! executing a search.

use thiserror::Error;

/// A result type using `SearchError`.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur in search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request is missing a required parameter or one is out of bounds.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The backing store could not be read.
    #[error("storage error: {0}")]
    Store(#[from] staffdir_store::StoreError),
}

impl SearchError {
    /// Returns the appropriate HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 422,
            Self::Store(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_codes() {
        assert_eq!(
            SearchError::InvalidRequest("org_id is required".into()).http_status_code(),
            422
        );
        assert_eq!(
            SearchError::Store(staffdir_store::StoreError::Database("down".into()))
                .http_status_code(),
            500
        );
    }
}

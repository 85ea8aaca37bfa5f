//! Data store errors

use crate::error::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by a [`DataStore`](super::DataStore) implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// Row is not a JSON object
    #[error("Invalid row for {table}: {message}")]
    InvalidRow { table: String, message: String },

    /// Row with the same id already exists
    #[error("Duplicate id {id} in {table}")]
    Conflict { table: String, id: String },

    /// Row could not be decoded into the expected model
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Caller is not allowed to touch the rows
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Backend could not be reached or answered unexpectedly
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for data store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::InvalidRow { .. } | StoreError::Decode(_) => ErrorCode::InvalidFormat,
            StoreError::Conflict { .. } => ErrorCode::AlreadyExists,
            StoreError::Forbidden(_) => ErrorCode::PermissionDenied,
            StoreError::Backend(_) => ErrorCode::DatabaseError,
        };
        AppError::with_message(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_into_app_error() {
        let err: AppError = StoreError::Conflict {
            table: "orders".into(),
            id: "1".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::AlreadyExists);
        assert_eq!(err.message, "Duplicate id 1 in orders");

        let err: AppError = StoreError::Backend("connection refused".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}

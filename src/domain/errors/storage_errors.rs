use thiserror::Error as ThisError;

use crate::domain::errors::ValidationError;

/// Errors produced by the object_store-backed client handle
///
/// Operation wrappers hand these back to the caller untouched.
#[derive(ThisError, Debug)]
pub enum StorageError {
    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("Invalid bucket name '{bucket}': {reason}")]
    InvalidBucketName {
        bucket: String,
        reason: ValidationError,
    },

    #[error("Invalid object key '{key}': {reason}")]
    InvalidObjectKey { key: String, reason: ValidationError },

    #[error("Failed to configure store for bucket '{bucket}': {source}")]
    Configuration {
        bucket: String,
        #[source]
        source: object_store::Error,
    },

    #[error("Unsupported operation '{operation}': {reason}")]
    UnsupportedOperation { operation: String, reason: String },
}

impl StorageError {
    /// True when the remote service reported a missing object
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::ObjectStore(object_store::Error::NotFound { .. })
        )
    }

    /// True when the remote service rejected the caller's credentials or permissions
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self,
            StorageError::ObjectStore(
                object_store::Error::PermissionDenied { .. }
                    | object_store::Error::Unauthenticated { .. }
            )
        )
    }
}

/// Result type for the object_store-backed client
pub type StorageResult<T> = Result<T, StorageError>;

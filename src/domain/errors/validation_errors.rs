use thiserror::Error as ThisError;

/// Validation errors for bucket and key value objects
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // ObjectKey validation errors
    #[error("Object key cannot be empty")]
    EmptyObjectKey,

    #[error("Object key too long: {actual} bytes (max: {max})")]
    ObjectKeyTooLong { actual: usize, max: usize },

    #[error("Invalid character in object key: {0:?}")]
    InvalidObjectKeyCharacter(char),

    #[error("Object key cannot start with '/'")]
    ObjectKeyStartsWithSlash,

    #[error("Object key cannot end with '/'")]
    ObjectKeyEndsWithSlash,

    #[error("Object key cannot contain '//'")]
    ObjectKeyContainsDoubleSlash,

    #[error("Object key cannot contain a '{0}' segment")]
    ObjectKeyRelativeSegment(String),

    // BucketName validation errors
    #[error("Bucket name too short: {actual} characters (min: {min})")]
    BucketNameTooShort { actual: usize, min: usize },

    #[error("Bucket name too long: {actual} characters (max: {max})")]
    BucketNameTooLong { actual: usize, max: usize },

    #[error("Bucket name must start with lowercase letter or number")]
    BucketNameInvalidStart,

    #[error("Bucket name must end with lowercase letter or number")]
    BucketNameInvalidEnd,

    #[error(
        "Invalid character in bucket name: '{0}'. Only lowercase letters, numbers, dots and hyphens allowed"
    )]
    BucketNameInvalidCharacter(char),

    #[error("Bucket name cannot contain consecutive dots")]
    BucketNameConsecutiveDots,

    #[error("Bucket name cannot be formatted as an IP address")]
    BucketNameLooksLikeIpAddress,
}

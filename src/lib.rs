pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - request/response models, value objects and errors
pub use domain::{
    BucketName,
    // Models
    DeleteObjectInput,
    DeleteObjectOutput,
    GetObjectInput,
    GetObjectOutput,
    HeadObjectInput,
    HeadObjectOutput,
    ListObjectsInput,
    ListObjectsOutput,
    ObjectAttributes,
    ObjectBody,
    // Value objects
    ObjectKey,
    ObjectSummary,
    PresignRequest,
    PresigningArguments,
    PutObjectInput,
    PutObjectOutput,
    SignedUrlOperation,
    SignedUrlOptions,
    // Errors
    StorageError,
    StorageResult,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{LogContext, Logger, Operation, StorageClient};

// Operation wrappers
pub use services::{
    BoundOperation, DeleteObject, GetObject, GetSignedUrl, HeadObject, ListObjects,
    OperationContext, PutObject,
};

// Facade and configuration
pub use app::{
    create_adapter, create_adapter_from_env, create_in_memory_adapter, create_s3_adapter,
    StorageAdapter,
};
pub use config::{ConfigError, S3Config, StorageConfig};

// Adapter types - infrastructure implementations
pub use adapters::outbound::logging::{LogEvent, MemoryLogger, TracingLogger};
pub use adapters::outbound::storage::{create_storage_client, ObjectStoreClient};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_adapter, create_in_memory_adapter, create_s3_adapter, GetObjectInput,
        ListObjectsInput, Logger, PutObjectInput, S3Config, SignedUrlOperation, SignedUrlOptions,
        StorageAdapter, StorageConfig, TracingLogger,
    };
}

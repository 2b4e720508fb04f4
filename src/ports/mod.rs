pub mod logging;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use logging::{LogContext, Logger};
pub use services::Operation;
pub use storage::StorageClient;

// Storage implementations
mod listing;
pub mod object_store_client;
pub mod s3;

// Re-export key types
pub use object_store_client::ObjectStoreClient;
pub use s3::build_s3_store;

use crate::config::StorageConfig;

/// Create a client handle for the given configuration.
///
/// Never fails and performs no I/O; configuration problems surface on the
/// first request that needs them.
pub fn create_storage_client(config: StorageConfig) -> ObjectStoreClient {
    ObjectStoreClient::new(config)
}

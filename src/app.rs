use std::sync::Arc;

use crate::{
    adapters::outbound::storage::{create_storage_client, ObjectStoreClient},
    config::{ConfigError, S3Config, StorageConfig},
    ports::{Logger, StorageClient},
    services::{
        BoundOperation, DeleteObject, GetObject, GetSignedUrl, HeadObject, ListObjects,
        OperationContext, PutObject,
    },
};

/// One client handle with the six operations bound to it
///
/// All operations share a single [`OperationContext`]; none depends on
/// another having been called first.
pub struct StorageAdapter<C: StorageClient = ObjectStoreClient> {
    /// The raw client, for anything the wrappers do not cover
    pub client: Arc<C>,
    pub put_object: BoundOperation<PutObject, C>,
    pub get_object: BoundOperation<GetObject, C>,
    pub delete_object: BoundOperation<DeleteObject, C>,
    pub list_objects: BoundOperation<ListObjects, C>,
    pub head_object: BoundOperation<HeadObject, C>,
    pub get_signed_url: BoundOperation<GetSignedUrl, C>,
}

impl<C: StorageClient> StorageAdapter<C> {
    /// Compose an adapter around an existing client
    pub fn with_client(client: C, logger: Option<Arc<dyn Logger>>) -> Self {
        let client = Arc::new(client);
        let context = Arc::new(OperationContext::new(Arc::clone(&client), logger));

        Self {
            client,
            put_object: BoundOperation::bind(Arc::clone(&context)),
            get_object: BoundOperation::bind(Arc::clone(&context)),
            delete_object: BoundOperation::bind(Arc::clone(&context)),
            list_objects: BoundOperation::bind(Arc::clone(&context)),
            head_object: BoundOperation::bind(Arc::clone(&context)),
            get_signed_url: BoundOperation::bind(context),
        }
    }
}

impl<C: StorageClient> Clone for StorageAdapter<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            put_object: self.put_object.clone(),
            get_object: self.get_object.clone(),
            delete_object: self.delete_object.clone(),
            list_objects: self.list_objects.clone(),
            head_object: self.head_object.clone(),
            get_signed_url: self.get_signed_url.clone(),
        }
    }
}

/// Build a client from `config` and bind every operation to it
pub fn create_adapter(
    config: StorageConfig,
    logger: Option<Arc<dyn Logger>>,
) -> StorageAdapter<ObjectStoreClient> {
    StorageAdapter::with_client(create_storage_client(config), logger)
}

// Convenience functions for common configurations

/// Create an in-memory adapter for testing and development
pub fn create_in_memory_adapter(logger: Option<Arc<dyn Logger>>) -> StorageAdapter {
    create_adapter(StorageConfig::InMemory, logger)
}

/// Create an S3-backed adapter
pub fn create_s3_adapter(config: S3Config, logger: Option<Arc<dyn Logger>>) -> StorageAdapter {
    create_adapter(StorageConfig::S3(config), logger)
}

/// Create an adapter from environment variables
pub fn create_adapter_from_env(
    logger: Option<Arc<dyn Logger>>,
) -> Result<StorageAdapter, ConfigError> {
    Ok(create_adapter(StorageConfig::from_env()?, logger))
}

use std::sync::Arc;

use crate::ports::{Logger, StorageClient};

/// Client handle plus optional logger shared by every bound operation
pub struct OperationContext<C> {
    client: Arc<C>,
    logger: Option<Arc<dyn Logger>>,
}

impl<C: StorageClient> OperationContext<C> {
    pub fn new(client: Arc<C>, logger: Option<Arc<dyn Logger>>) -> Self {
        Self { client, logger }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Shared handle to the client, for callers that need to keep it
    pub fn client_handle(&self) -> Arc<C> {
        Arc::clone(&self.client)
    }

    pub fn logger(&self) -> Option<&dyn Logger> {
        self.logger.as_deref()
    }
}

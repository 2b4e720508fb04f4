use std::marker::PhantomData;
use std::sync::Arc;

use crate::{
    ports::{LogContext, Operation, StorageClient},
    services::OperationContext,
};

/// An operation bound to a shared context, ready to be called per request
pub struct BoundOperation<O, C> {
    context: Arc<OperationContext<C>>,
    _operation: PhantomData<fn() -> O>,
}

impl<O: Operation, C: StorageClient> BoundOperation<O, C> {
    pub fn bind(context: Arc<OperationContext<C>>) -> Self {
        Self {
            context,
            _operation: PhantomData,
        }
    }

    /// Run the operation once.
    ///
    /// Emits `<op>:start` before the request, then exactly one of
    /// `<op>:success` or `<op>:error`. A failure is returned unchanged.
    pub async fn call(&self, input: O::Input) -> Result<O::Output, C::Error> {
        let logger = self.context.logger();

        if let Some(logger) = logger {
            let data = O::start_data(&input);
            logger.debug(&format!("{}:start", O::NAME), LogContext::data(&data));
        }

        match O::send(self.context.client(), input).await {
            Ok(output) => {
                if let Some(logger) = logger {
                    let data = O::success_data(&output);
                    let context = data.as_ref().map_or_else(LogContext::none, LogContext::data);
                    logger.debug(&format!("{}:success", O::NAME), context);
                }
                Ok(output)
            }
            Err(error) => {
                if let Some(logger) = logger {
                    logger.debug(&format!("{}:error", O::NAME), LogContext::error(&error));
                }
                Err(error)
            }
        }
    }

    pub fn context(&self) -> &Arc<OperationContext<C>> {
        &self.context
    }
}

impl<O, C> Clone for BoundOperation<O, C> {
    fn clone(&self) -> Self {
        Self {
            context: Arc::clone(&self.context),
            _operation: PhantomData,
        }
    }
}

impl<O: Operation, C> std::fmt::Debug for BoundOperation<O, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundOperation")
            .field("operation", &O::NAME)
            .finish_non_exhaustive()
    }
}

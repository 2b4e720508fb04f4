use tracing::debug;

use crate::ports::logging::{LogContext, Logger};

/// Forwards operation events to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str, context: LogContext<'_>) {
        match (context.error, context.data) {
            (Some(error), Some(data)) => debug!(error = %error, data = %data, "{}", message),
            (Some(error), None) => debug!(error = %error, "{}", message),
            (None, Some(data)) => debug!(data = %data, "{}", message),
            (None, None) => debug!("{}", message),
        }
    }
}

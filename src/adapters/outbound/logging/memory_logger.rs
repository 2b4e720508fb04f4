use std::sync::{Mutex, PoisonError};

use serde_json::Value;

use crate::ports::logging::{LogContext, Logger};

/// One recorded log event
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub message: String,
    pub data: Option<Value>,
    /// Display form of the error, when the event carried one
    pub error: Option<String>,
}

/// Keeps every event in memory, in emission order
#[derive(Debug, Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events().into_iter().map(|event| event.message).collect()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str, context: LogContext<'_>) {
        let event = LogEvent {
            message: message.to_string(),
            data: context.data.cloned(),
            error: context.error.map(|error| error.to_string()),
        };
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_in_order() {
        let logger = MemoryLogger::new();
        let data = json!({ "Bucket": "b1" });
        let error = std::io::Error::new(std::io::ErrorKind::Other, "boom");

        logger.debug("op:start", LogContext::data(&data));
        logger.debug("op:error", LogContext::error(&error));

        let events = logger.events();
        assert_eq!(logger.messages(), vec!["op:start", "op:error"]);
        assert_eq!(events[0].data, Some(data));
        assert_eq!(events[1].error.as_deref(), Some("boom"));

        logger.clear();
        assert!(logger.events().is_empty());
    }
}

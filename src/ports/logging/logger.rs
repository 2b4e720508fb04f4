use serde_json::Value;

/// Structured payload attached to a log event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogContext<'a> {
    pub error: Option<&'a (dyn std::error::Error + 'static)>,
    pub data: Option<&'a Value>,
}

impl<'a> LogContext<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn data(data: &'a Value) -> Self {
        Self {
            error: None,
            data: Some(data),
        }
    }

    pub fn error(error: &'a (dyn std::error::Error + 'static)) -> Self {
        Self {
            error: Some(error),
            data: None,
        }
    }
}

/// Best-effort sink for operation lifecycle events
///
/// Called inline on the operation's task, so implementations must return quickly.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, context: LogContext<'_>);
}

mod logger;

pub use logger::{LogContext, Logger};

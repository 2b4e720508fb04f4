mod memory_logger;
mod tracing_logger;

pub use memory_logger::{LogEvent, MemoryLogger};
pub use tracing_logger::TracingLogger;

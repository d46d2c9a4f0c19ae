//! Sink implementations

pub mod json;
pub mod memory;
pub mod noop;
pub mod stderr_trace;

#[cfg(feature = "console")]
pub mod console;

pub use json::JsonSink;
pub use memory::{MemorySink, MemoryTraceSink, TraceRecord};
pub use noop::NoopSink;
pub use stderr_trace::StderrTraceSink;

#[cfg(feature = "console")]
pub use console::ConsoleSink;

// Re-export the sink traits alongside their implementations
pub use crate::core::{EventSink, TraceSink};

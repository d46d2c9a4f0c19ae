//! No-op sink, the default external sink

use crate::core::{EventLevel, EventSink, LogEntry, TraceSink};

/// Discards everything and reports itself disabled at every level.
///
/// A freshly built context uses this for both channels, so a library can
/// log unconditionally and pay nothing until an operator attaches a real
/// sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn is_enabled(&self, _level: EventLevel) -> bool {
        false
    }

    fn log(&self, _entry: &LogEntry) {}
}

impl TraceSink for NoopSink {
    fn is_enabled(&self) -> bool {
        false
    }

    fn level(&self) -> EventLevel {
        EventLevel::LogAlways
    }

    fn write(&self, _level: EventLevel, _inner: Option<&str>, _message: &str) {}
}

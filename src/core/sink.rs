//! Sink traits for diagnostics delivery

use super::{event_level::EventLevel, log_entry::LogEntry};

/// The high-performance internal trace sink.
///
/// Always consulted first on every dispatch, gated by its own enabled flag
/// and minimum level, fully independent of the external sink. Messages
/// arrive already rendered by the redaction formatter.
pub trait TraceSink: Send + Sync {
    fn is_enabled(&self) -> bool;

    /// The minimum level this sink accepts. `LogAlways` entries pass any
    /// minimum.
    fn level(&self) -> EventLevel;

    /// Delivers a rendered message, along with the inner-cause text when a
    /// cause was attached to the call.
    fn write(&self, level: EventLevel, inner: Option<&str>, message: &str);

    fn write_verbose(&self, message: &str) {
        self.write(EventLevel::Verbose, None, message);
    }

    fn write_information(&self, message: &str) {
        self.write(EventLevel::Informational, None, message);
    }

    fn write_warning(&self, message: &str) {
        self.write(EventLevel::Warning, None, message);
    }
}

/// The pluggable external sink.
///
/// Swappable at runtime; per-level enablement is the sink's own policy.
/// Delivery is best-effort: implementations swallow their own I/O failures
/// and never surface them to the logging caller.
pub trait EventSink: Send + Sync {
    fn is_enabled(&self, level: EventLevel) -> bool;
    fn log(&self, entry: &LogEntry);
}

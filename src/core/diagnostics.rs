//! The diagnostics context: redaction mode, sink handles, and dispatch

use super::{
    error::Cause,
    event_level::EventLevel,
    format::{format_message, LogArgument},
    log_entry::LogEntry,
    metrics::DiagnosticsMetrics,
    sink::{EventSink, TraceSink},
};
use crate::sinks::NoopSink;
use chrono::Utc;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The diagnostics context shared by every call site.
///
/// Holds the process-wide state the original design kept in ambient
/// globals: the redaction flag, the internal trace sink, the pluggable
/// external sink, and the banner flag. Configure once (usually at startup),
/// then share a handle — all operations take `&self` and are safe to call
/// concurrently without any centralized locking.
pub struct Diagnostics {
    /// Redaction toggle: `false` means sensitive arguments are hidden.
    show_pii: AtomicBool,
    /// One-way flag guarding the one-time banner emission.
    banner_written: AtomicBool,
    /// Internal trace sink, fixed at build time, always consulted first.
    trace: Arc<dyn TraceSink>,
    /// External sink handle; swappable at any time, last write wins.
    sink: RwLock<Arc<dyn EventSink>>,
    metrics: DiagnosticsMetrics,
}

impl Diagnostics {
    /// Create a context with redaction active and both sinks no-ops.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for [`Diagnostics`]
    ///
    /// # Example
    /// ```
    /// use token_diagnostics::prelude::*;
    ///
    /// let diag = Diagnostics::builder()
    ///     .show_pii(false)
    ///     .event_sink(MemorySink::new(EventLevel::Informational))
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> DiagnosticsBuilder {
        DiagnosticsBuilder::new()
    }

    /// Whether personally identifiable argument values are written in full.
    #[inline]
    pub fn show_pii(&self) -> bool {
        self.show_pii.load(Ordering::Relaxed)
    }

    /// Operator configuration: turn full PII disclosure on or off.
    pub fn set_show_pii(&self, show: bool) {
        self.show_pii.store(show, Ordering::Relaxed);
    }

    /// Replace the external sink. Callers already inside a logging
    /// operation keep the handle they read; later calls observe the new one.
    pub fn set_event_sink(&self, sink: Arc<dyn EventSink>) {
        *self.sink.write() = sink;
    }

    /// The current external sink handle.
    pub fn event_sink(&self) -> Arc<dyn EventSink> {
        Arc::clone(&self.sink.read())
    }

    /// Counters for deliveries, constructed errors, and banner emissions.
    pub fn metrics(&self) -> &DiagnosticsMetrics {
        &self.metrics
    }

    /// Formats a positional template under the context's redaction mode.
    pub fn format(&self, template: &str, args: &[LogArgument]) -> String {
        format_message(self.show_pii(), Some(template), Some(args))
    }

    /// Log a message at the given level through both sinks.
    ///
    /// An empty `args` slice leaves the template untouched, so plain
    /// messages never pass through the substitution parser.
    pub fn write(&self, level: EventLevel, template: &str, args: &[LogArgument]) {
        let args = if args.is_empty() { None } else { Some(args) };
        self.dispatch(level, None, template, args);
    }

    #[inline]
    pub fn write_verbose(&self, template: &str, args: &[LogArgument]) {
        self.write(EventLevel::Verbose, template, args);
    }

    #[inline]
    pub fn write_information(&self, template: &str, args: &[LogArgument]) {
        self.write(EventLevel::Informational, template, args);
    }

    #[inline]
    pub fn write_warning(&self, template: &str, args: &[LogArgument]) {
        self.write(EventLevel::Warning, template, args);
    }

    /// Delivers one event to both sinks, each behind its own gate.
    ///
    /// The trace sink is consulted first; the external sink is evaluated
    /// independently, so failure or disablement of one never affects the
    /// other. `message` is a template when `args` are supplied and a final
    /// message otherwise.
    pub(crate) fn dispatch(
        &self,
        level: EventLevel,
        cause: Option<&Cause>,
        message: &str,
        args: Option<&[LogArgument]>,
    ) {
        let show_pii = self.show_pii();

        if self.trace.is_enabled() && level.passes(self.trace.level()) {
            let inner = cause.map(|cause| cause.presentation(show_pii));
            let rendered = format_message(show_pii, Some(message), args);
            self.trace.write(level, inner.as_deref(), &rendered);
            self.metrics.record_trace_delivery();
        }

        let sink = self.event_sink();
        if sink.is_enabled(level) {
            self.ensure_banner(sink.as_ref());
            let entry = self.build_entry(level, cause, message, args);
            sink.log(&entry);
            self.metrics.record_sink_delivery();
        }
    }

    /// Assembles the external-sink entry, folding in the inner-cause text.
    ///
    /// The cause text is appended to the template before any argument
    /// substitution: the final message is the formatter's output over the
    /// augmented template.
    fn build_entry(
        &self,
        level: EventLevel,
        cause: Option<&Cause>,
        message: &str,
        args: Option<&[LogArgument]>,
    ) -> LogEntry {
        let show_pii = self.show_pii();
        let mut message = message.to_string();
        if let Some(cause) = cause {
            message.push_str(&format!(
                ", InnerException: {}",
                cause.presentation(show_pii)
            ));
        }
        LogEntry::new(level, format_message(show_pii, Some(&message), args))
    }

    /// Emits the three banner entries before the first real delivery.
    ///
    /// The flag is checked and set without a compare-and-swap: a racing
    /// thread may emit a second banner, which is an accepted redundancy.
    /// Banner entries carry the top sentinel level and are delivered
    /// without consulting the sink's level gate.
    fn ensure_banner(&self, sink: &dyn EventSink) {
        if self.banner_written.load(Ordering::Relaxed) {
            return;
        }
        self.banner_written.store(true, Ordering::Relaxed);

        let mode = if self.show_pii() {
            "PII logging is ON; sensitive arguments are written in full"
        } else {
            "PII logging is OFF; sensitive arguments are redacted to type names"
        };
        let banner = [
            format!("Library version: {}", env!("CARGO_PKG_VERSION")),
            format!("Date: {}", Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            mode.to_string(),
        ];
        for message in banner {
            sink.log(&LogEntry::new(EventLevel::LogAlways, message));
        }
        self.metrics.record_banner_emission();
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing [`Diagnostics`] with a fluent API
///
/// # Example
/// ```
/// use token_diagnostics::prelude::*;
///
/// let diag = Diagnostics::builder()
///     .show_pii(false)
///     .trace_sink(StderrTraceSink::new(EventLevel::Warning))
///     .event_sink(MemorySink::new(EventLevel::Verbose))
///     .build();
/// diag.write_information("startup complete after {0} ms", &[non_pii(12)]);
/// ```
pub struct DiagnosticsBuilder {
    show_pii: bool,
    trace: Arc<dyn TraceSink>,
    sink: Arc<dyn EventSink>,
}

impl DiagnosticsBuilder {
    /// Create a new builder with redaction active and no-op sinks
    pub fn new() -> Self {
        Self {
            show_pii: false,
            trace: Arc::new(NoopSink),
            sink: Arc::new(NoopSink),
        }
    }

    /// Set whether sensitive argument values are written in full
    #[must_use = "builder methods return a new value"]
    pub fn show_pii(mut self, show: bool) -> Self {
        self.show_pii = show;
        self
    }

    /// Set the internal trace sink
    #[must_use = "builder methods return a new value"]
    pub fn trace_sink<S: TraceSink + 'static>(mut self, sink: S) -> Self {
        self.trace = Arc::new(sink);
        self
    }

    /// Set the external event sink
    #[must_use = "builder methods return a new value"]
    pub fn event_sink<S: EventSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Build the [`Diagnostics`] context
    pub fn build(self) -> Diagnostics {
        Diagnostics {
            show_pii: AtomicBool::new(self.show_pii),
            banner_written: AtomicBool::new(false),
            trace: self.trace,
            sink: RwLock::new(self.sink),
            metrics: DiagnosticsMetrics::new(),
        }
    }
}

impl Default for DiagnosticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! # Token Diagnostics
//!
//! A PII-aware diagnostics core for security-token libraries: typed error
//! construction, redacting message formatting, and dual-sink dispatch.
//!
//! ## Features
//!
//! - **Redaction by default**: sensitive arguments render as type-name
//!   placeholders until an operator explicitly opts into full disclosure
//! - **Typed errors**: a closed error-kind registry with deterministic
//!   construction shapes, logged at the moment they are built
//! - **Dual sinks**: an internal trace channel and a pluggable external
//!   sink, each behind its own gate
//! - **Thread safe**: atomic flags and a swap-tolerant sink handle, no
//!   centralized locking

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        format_message, non_pii, pii, redaction_placeholder, Cause, ConfigurationValidator,
        ConstructionShape, Diagnostics, DiagnosticsBuilder, DiagnosticsMetrics, ErrorKind,
        EventLevel, EventSink, LogArgument, LogEntry, Result, TokenError, TraceSink,
        ValidationResult,
    };
    pub use crate::sinks::{JsonSink, MemorySink, MemoryTraceSink, NoopSink, StderrTraceSink, TraceRecord};

    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
}

pub use crate::core::{
    format_message, non_pii, pii, redaction_placeholder, Cause, ConfigurationValidator,
    ConstructionShape, Diagnostics, DiagnosticsBuilder, DiagnosticsMetrics, ErrorKind, EventLevel,
    EventSink, LogArgument, LogEntry, Result, TokenError, TraceSink, ValidationResult,
};
pub use crate::sinks::{JsonSink, MemorySink, MemoryTraceSink, NoopSink, StderrTraceSink, TraceRecord};

#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;

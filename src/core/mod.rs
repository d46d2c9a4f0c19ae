//! Core diagnostics types and traits

pub mod diagnostics;
pub mod error;
pub mod event_level;
pub mod factory;
pub mod format;
pub mod log_entry;
pub mod metrics;
pub mod sink;
pub mod validation;

pub use diagnostics::{Diagnostics, DiagnosticsBuilder};
pub use error::{Cause, ConstructionShape, ErrorKind, Result, TokenError};
pub use event_level::EventLevel;
pub use format::{format_message, non_pii, pii, redaction_placeholder, LogArgument};
pub use log_entry::LogEntry;
pub use metrics::DiagnosticsMetrics;
pub use sink::{EventSink, TraceSink};
pub use validation::{ConfigurationValidator, ValidationResult};

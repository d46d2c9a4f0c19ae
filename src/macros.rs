//! Logging macros for ergonomic diagnostics calls.
//!
//! These macros wrap the context operations so call sites can pass
//! positional-template arguments without spelling out the slice literal.
//!
//! # Examples
//!
//! ```
//! use token_diagnostics::prelude::*;
//! use token_diagnostics::{log_information, log_warning};
//!
//! let diag = Diagnostics::new();
//!
//! // Basic logging
//! log_information!(diag, "Token handler started");
//!
//! // With tagged arguments: PII stays redactable, names render verbatim
//! log_information!(diag, "User {0} logged in from {1}", pii("alice"), non_pii("primary-region"));
//!
//! // Warnings follow the same shape
//! log_warning!(diag, "Clock skew above {0} seconds", non_pii(300));
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use token_diagnostics::prelude::*;
/// # let diag = Diagnostics::new();
/// use token_diagnostics::log_event;
/// log_event!(diag, EventLevel::Critical, "Signing key unavailable");
/// log_event!(diag, EventLevel::Informational, "Validated token for {0}", pii("bob"));
/// ```
#[macro_export]
macro_rules! log_event {
    ($diag:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $diag.write($level, $template, &[$($arg),*])
    };
}

/// Log a verbose-level message.
///
/// # Examples
///
/// ```
/// # use token_diagnostics::prelude::*;
/// # let diag = Diagnostics::new();
/// use token_diagnostics::log_verbose;
/// log_verbose!(diag, "Entering signature validation");
/// log_verbose!(diag, "Header segment length: {0}", non_pii(342));
/// ```
#[macro_export]
macro_rules! log_verbose {
    ($diag:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_event!($diag, $crate::EventLevel::Verbose, $template $(, $arg)*)
    };
}

/// Log an informational-level message.
///
/// # Examples
///
/// ```
/// # use token_diagnostics::prelude::*;
/// # let diag = Diagnostics::new();
/// use token_diagnostics::log_information;
/// log_information!(diag, "Metadata refresh complete");
/// log_information!(diag, "Accepted token issued by {0}", non_pii("https://issuer.example"));
/// ```
#[macro_export]
macro_rules! log_information {
    ($diag:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_event!($diag, $crate::EventLevel::Informational, $template $(, $arg)*)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use token_diagnostics::prelude::*;
/// # let diag = Diagnostics::new();
/// use token_diagnostics::log_warning;
/// log_warning!(diag, "Key rollover pending");
/// log_warning!(diag, "Retry attempt {0} of {1}", non_pii(3), non_pii(5));
/// ```
#[macro_export]
macro_rules! log_warning {
    ($diag:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_event!($diag, $crate::EventLevel::Warning, $template $(, $arg)*)
    };
}

/// Log and build a typed error; evaluates to the [`TokenError`](crate::TokenError).
///
/// # Examples
///
/// ```
/// # use token_diagnostics::prelude::*;
/// # let diag = Diagnostics::new();
/// use token_diagnostics::log_error;
/// let error = log_error!(diag, ErrorKind::TokenExpired, "Token expired at {0}", non_pii("2026-01-01T00:00:00Z"));
/// assert_eq!(error.kind(), ErrorKind::TokenExpired);
/// ```
#[macro_export]
macro_rules! log_error {
    ($diag:expr, $kind:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $diag.error($kind, $template, &[$($arg),*])
    };
}

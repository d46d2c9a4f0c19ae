//! Error factory operations: render, dispatch, then construct

use super::{
    diagnostics::Diagnostics,
    error::{Cause, ErrorKind, TokenError},
    event_level::EventLevel,
    format::{non_pii, LogArgument},
};

impl Diagnostics {
    /// Builds a [`TokenError`] after logging its message.
    ///
    /// The template is rendered exactly once under the context's redaction
    /// mode, the rendered text is dispatched at `level`, and the same text
    /// becomes the error's message. A redacted message is redacted
    /// everywhere: in both sinks and in the returned error.
    ///
    /// # Panics
    /// Panics when `kind` does not support the construction shape implied
    /// by `argument` and `cause`. That combination is a programming error
    /// at the call site, not a runtime condition.
    pub fn make_error(
        &self,
        kind: ErrorKind,
        level: EventLevel,
        argument: Option<&str>,
        cause: Option<Cause>,
        template: &str,
        args: &[LogArgument],
    ) -> TokenError {
        let message = if args.is_empty() {
            template.to_string()
        } else {
            self.format(template, args)
        };
        self.dispatch(level, cause.as_ref(), &message, None);
        let error = TokenError::from_parts(
            kind,
            argument.map(str::to_string),
            message,
            cause,
        );
        self.metrics().record_error_constructed();
        error
    }

    /// Log and build an error of `kind` at the Error level.
    pub fn error(&self, kind: ErrorKind, template: &str, args: &[LogArgument]) -> TokenError {
        self.make_error(kind, EventLevel::Error, None, None, template, args)
    }

    /// Log and build an error of `kind` wrapping an underlying cause.
    pub fn error_with_cause(
        &self,
        kind: ErrorKind,
        cause: Cause,
        template: &str,
        args: &[LogArgument],
    ) -> TokenError {
        self.make_error(kind, EventLevel::Error, None, Some(cause), template, args)
    }

    /// Log and build an invalid-argument error naming the offending parameter.
    pub fn argument_error(&self, name: &str, template: &str, args: &[LogArgument]) -> TokenError {
        self.make_error(
            ErrorKind::InvalidArgument,
            EventLevel::Error,
            Some(name),
            None,
            template,
            args,
        )
    }

    /// Log and build the canonical null-or-empty argument error.
    ///
    /// Parameter names identify code, not people, so the name is carried
    /// as a non-PII argument and survives redaction.
    pub fn argument_null(&self, name: &str) -> TokenError {
        self.make_error(
            ErrorKind::ArgumentNull,
            EventLevel::Error,
            Some(name),
            None,
            "The parameter '{0}' cannot be null or empty",
            &[non_pii(name)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::pii;
    use crate::sinks::MemorySink;

    fn capturing_context() -> (Diagnostics, std::sync::Arc<parking_lot::Mutex<Vec<crate::core::log_entry::LogEntry>>>) {
        let sink = MemorySink::new(EventLevel::Verbose);
        let entries = sink.entries_handle();
        let diag = Diagnostics::builder().event_sink(sink).build();
        (diag, entries)
    }

    #[test]
    fn test_error_is_logged_before_being_returned() {
        let (diag, entries) = capturing_context();

        let error = diag.error(ErrorKind::Format, "cannot parse '{0}'", &[non_pii("header")]);

        assert_eq!(error.kind(), ErrorKind::Format);
        assert_eq!(error.message(), "cannot parse 'header'");
        let captured = entries.lock().clone();
        assert!(captured.iter().any(|e| {
            e.level == EventLevel::Error && e.message == "cannot parse 'header'"
        }));
        assert_eq!(diag.metrics().errors_constructed(), 1);
    }

    #[test]
    fn test_redacted_message_is_redacted_in_the_error_too() {
        let (diag, _entries) = capturing_context();

        let error = diag.error(
            ErrorKind::SecurityToken,
            "token for '{0}' rejected",
            &[pii("alice@example.com")],
        );

        assert!(!error.message().contains("alice@example.com"));
        assert!(error.message().contains("[PII of type '"));
    }

    #[test]
    fn test_show_pii_exposes_values_in_error_message() {
        let (diag, _entries) = capturing_context();
        diag.set_show_pii(true);

        let error = diag.error(
            ErrorKind::SecurityToken,
            "token for '{0}' rejected",
            &[pii("alice@example.com")],
        );

        assert!(error.message().contains("alice@example.com"));
    }

    #[test]
    fn test_error_with_cause_appends_inner_text_to_log_only() {
        let (diag, entries) = capturing_context();

        let inner = Cause::internal(TokenError::new(ErrorKind::Format, "bad payload"));
        let error = diag.error_with_cause(ErrorKind::SecurityToken, inner, "validation failed", &[]);

        // The error message stays unaugmented; the log entry carries the cause.
        assert_eq!(error.message(), "validation failed");
        assert!(error.cause().is_some());
        let captured = entries.lock().clone();
        assert!(captured
            .iter()
            .any(|e| e.message == "validation failed, InnerException: bad payload"));
    }

    #[test]
    fn test_argument_null_names_the_parameter() {
        let (diag, _entries) = capturing_context();

        let error = diag.argument_null("issuer");

        assert_eq!(error.kind(), ErrorKind::ArgumentNull);
        assert_eq!(error.argument(), Some("issuer"));
        assert_eq!(error.message(), "The parameter 'issuer' cannot be null or empty");
    }

    #[test]
    fn test_argument_name_survives_redaction() {
        let (diag, _entries) = capturing_context();
        assert!(!diag.show_pii());

        let error = diag.argument_null("audience");
        assert!(error.message().contains("audience"));
    }

    #[test]
    #[should_panic(expected = "does not support")]
    fn test_unsupported_shape_panics() {
        let (diag, _entries) = capturing_context();
        // NotSupported errors take a bare message; naming an argument is a
        // call-site bug.
        let _ = diag.make_error(
            ErrorKind::NotSupported,
            EventLevel::Error,
            Some("claim"),
            None,
            "unsupported algorithm",
            &[],
        );
    }
}

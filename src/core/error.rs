//! Error types produced by the diagnostics core

use std::error::Error as StdError;
use std::fmt;

pub type Result<T> = std::result::Result<T, TokenError>;

/// The closed set of error kinds the typed error factory can construct.
///
/// Each kind declares at compile time which construction shapes it exposes;
/// there is no runtime registry and no reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument value failed validation.
    InvalidArgument,
    /// A required argument was null or empty.
    ArgumentNull,
    /// The operation is invalid in the current state.
    InvalidOperation,
    /// Input was malformed.
    Format,
    /// General security-token failure.
    SecurityToken,
    /// The token's validity window has passed.
    TokenExpired,
    /// Configuration was rejected by a validation gate.
    Configuration,
    /// The requested operation is not supported.
    NotSupported,
}

/// The four constructor shapes an error kind may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionShape {
    Message,
    MessageCause,
    NameMessage,
    NameMessageCause,
}

impl ConstructionShape {
    /// Deterministic shape selection from the parts present: name and cause
    /// select the four-part shape, a cause alone the message+cause shape, a
    /// name alone the name+message shape, neither the plain message shape.
    pub fn select(has_name: bool, has_cause: bool) -> Self {
        match (has_name, has_cause) {
            (true, true) => ConstructionShape::NameMessageCause,
            (true, false) => ConstructionShape::NameMessage,
            (false, true) => ConstructionShape::MessageCause,
            (false, false) => ConstructionShape::Message,
        }
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::ArgumentNull => "argument null",
            ErrorKind::InvalidOperation => "invalid operation",
            ErrorKind::Format => "format",
            ErrorKind::SecurityToken => "security token",
            ErrorKind::TokenExpired => "token expired",
            ErrorKind::Configuration => "configuration",
            ErrorKind::NotSupported => "not supported",
        }
    }

    /// Whether this kind exposes the given construction shape.
    pub fn supports(&self, shape: ConstructionShape) -> bool {
        use ConstructionShape::*;
        match self {
            ErrorKind::InvalidArgument => true,
            ErrorKind::ArgumentNull => matches!(shape, NameMessage | NameMessageCause),
            ErrorKind::InvalidOperation
            | ErrorKind::Format
            | ErrorKind::SecurityToken
            | ErrorKind::TokenExpired
            | ErrorKind::Configuration => matches!(shape, Message | MessageCause),
            ErrorKind::NotSupported => matches!(shape, Message),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An inner error attached to a constructed [`TokenError`], tagged at the
/// call site so the presentation rule never inspects type names at runtime.
#[derive(Debug)]
pub enum Cause {
    /// One of this library's own errors. Its message was produced by the
    /// redaction formatter, so full disclosure is always safe.
    Internal(Box<TokenError>),
    /// A foreign error. While redaction is active only its type name is
    /// disclosed.
    External {
        type_name: &'static str,
        error: Box<dyn StdError + Send + Sync>,
    },
}

impl Cause {
    pub fn internal(error: TokenError) -> Self {
        Cause::Internal(Box::new(error))
    }

    pub fn external<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Cause::External {
            type_name: std::any::type_name::<E>(),
            error: Box::new(error),
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, Cause::Internal(_))
    }

    /// The declared type name of the wrapped error.
    pub fn type_name(&self) -> &'static str {
        match self {
            Cause::Internal(_) => std::any::type_name::<TokenError>(),
            Cause::External { type_name, .. } => type_name,
        }
    }

    /// The PII-aware rendering: the full message text when redaction is off
    /// or the cause is one of ours, otherwise just the type name.
    pub fn presentation(&self, show_pii: bool) -> String {
        if show_pii || self.is_internal() {
            self.to_string()
        } else {
            self.type_name().to_string()
        }
    }
}

impl From<TokenError> for Cause {
    fn from(error: TokenError) -> Self {
        Cause::internal(error)
    }
}

impl fmt::Display for Cause {
    /// Storage never redacts; redaction applies at presentation time only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Internal(error) => error.fmt(f),
            Cause::External { error, .. } => error.fmt(f),
        }
    }
}

impl StdError for Cause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Cause::Internal(error) => error.source(),
            Cause::External { error, .. } => error.source(),
        }
    }
}

/// An error constructed by the typed error factory.
///
/// Modeled after `std::io::Error`: an [`ErrorKind`] discriminant plus the
/// rendered message, an optional offending-argument name, and an optional
/// inner cause.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct TokenError {
    kind: ErrorKind,
    argument: Option<String>,
    message: String,
    #[source]
    source: Option<Box<Cause>>,
}

impl TokenError {
    /// Builds an error with the construction shape selected from the parts
    /// present. An empty argument name counts as absent.
    ///
    /// # Panics
    ///
    /// Panics if `kind` does not support the selected shape. That is a
    /// contract violation in the calling code's kind choice, not a runtime
    /// condition, and it is never downgraded to a different kind.
    pub fn from_parts(
        kind: ErrorKind,
        argument: Option<String>,
        message: String,
        cause: Option<Cause>,
    ) -> Self {
        let argument = argument.filter(|name| !name.is_empty());
        let shape = ConstructionShape::select(argument.is_some(), cause.is_some());
        assert!(
            kind.supports(shape),
            "error kind '{}' does not support the {:?} construction shape",
            kind,
            shape
        );
        Self {
            kind,
            argument,
            message,
            source: cause.map(Box::new),
        }
    }

    /// Message-only construction.
    ///
    /// # Panics
    ///
    /// Panics if `kind` does not support the message shape.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::from_parts(kind, None, message.into(), None)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.source.as_deref()
    }
}

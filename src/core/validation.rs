//! Thin validation contract for host-supplied configuration policies

use super::error::{ErrorKind, TokenError};

/// Outcome of a configuration validation pass.
#[derive(Debug)]
pub struct ValidationResult {
    pub succeeded: bool,
    pub error: Option<TokenError>,
}

impl ValidationResult {
    /// A passing result carrying no error.
    #[must_use]
    pub fn success() -> Self {
        Self {
            succeeded: true,
            error: None,
        }
    }

    /// A failing result carrying the typed error describing the problem.
    #[must_use]
    pub fn failure(error: TokenError) -> Self {
        Self {
            succeeded: false,
            error: Some(error),
        }
    }

    /// Adapt to `Result` so call sites can gate with `?`.
    ///
    /// A failing result that carries no error maps to a generic
    /// configuration error rather than panicking.
    pub fn into_result(self) -> Result<(), TokenError> {
        if self.succeeded {
            return Ok(());
        }
        Err(self.error.unwrap_or_else(|| {
            TokenError::new(ErrorKind::Configuration, "configuration validation failed")
        }))
    }
}

/// Pure policy hook: inspects a configuration value, reports an outcome.
///
/// Implementations hold no mutable state and may be shared across threads.
pub trait ConfigurationValidator<C>: Send + Sync {
    fn validate(&self, configuration: &C) -> ValidationResult;
}

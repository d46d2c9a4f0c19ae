//! Plain-text trace sink writing to stderr

use crate::core::{EventLevel, TraceSink};

/// Internal-channel sink printing one line per delivery to stderr.
pub struct StderrTraceSink {
    enabled: bool,
    min_level: EventLevel,
}

impl StderrTraceSink {
    pub fn new(min_level: EventLevel) -> Self {
        Self {
            enabled: true,
            min_level,
        }
    }

    /// Enable or disable the sink without detaching it.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for StderrTraceSink {
    fn default() -> Self {
        Self::new(EventLevel::Informational)
    }
}

impl TraceSink for StderrTraceSink {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn level(&self) -> EventLevel {
        self.min_level
    }

    fn write(&self, level: EventLevel, inner: Option<&str>, message: &str) {
        match inner {
            Some(inner) => eprintln!(
                "[{}] {}, InnerException: {}",
                level.to_str(),
                message,
                inner
            ),
            None => eprintln!("[{}] {}", level.to_str(), message),
        }
    }
}

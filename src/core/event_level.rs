//! Event level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum EventLevel {
    Verbose = 0,
    #[default]
    Informational = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
    /// Top sentinel level: entries at this level pass every level gate.
    LogAlways = 5,
}

impl EventLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            EventLevel::Verbose => "VERBOSE",
            EventLevel::Informational => "INFO",
            EventLevel::Warning => "WARN",
            EventLevel::Error => "ERROR",
            EventLevel::Critical => "CRITICAL",
            EventLevel::LogAlways => "ALWAYS",
        }
    }

    /// Whether an entry at this level passes a sink configured with the
    /// given minimum level. `LogAlways` sits at the top of the ordering and
    /// therefore passes unconditionally.
    #[inline]
    pub fn passes(&self, minimum: EventLevel) -> bool {
        *self >= minimum
    }
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for EventLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "VERBOSE" => Ok(EventLevel::Verbose),
            "INFO" | "INFORMATIONAL" => Ok(EventLevel::Informational),
            "WARN" | "WARNING" => Ok(EventLevel::Warning),
            "ERROR" => Ok(EventLevel::Error),
            "CRITICAL" => Ok(EventLevel::Critical),
            "ALWAYS" | "LOGALWAYS" => Ok(EventLevel::LogAlways),
            _ => Err(format!("Invalid event level: '{}'", s)),
        }
    }
}

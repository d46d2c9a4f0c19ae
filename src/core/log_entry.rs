//! Log entry structure

use super::event_level::EventLevel;
use serde::{Deserialize, Serialize};

/// A single flat diagnostics entry: the level it was raised at and the fully
/// rendered message.
///
/// Entries are immutable once dispatched. The core builds one per delivery
/// and hands it to the external sink; nothing is persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: EventLevel,
    pub message: String,
}

impl LogEntry {
    /// Sanitize the message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so an attacker-controlled value cannot forge additional entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: EventLevel, message: String) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message),
        }
    }
}

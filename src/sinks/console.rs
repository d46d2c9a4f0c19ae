//! Console sink implementation

use crate::core::{EventLevel, EventSink, LogEntry};
use colored::Colorize;

/// Writes entries to the terminal, one line each.
///
/// Error and Critical entries go to stderr, everything else to stdout.
pub struct ConsoleSink {
    min_level: EventLevel,
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new(min_level: EventLevel) -> Self {
        Self {
            min_level,
            use_colors: true,
        }
    }

    /// Enable or disable ANSI colors
    ///
    /// # Example
    ///
    /// ```
    /// use token_diagnostics::sinks::ConsoleSink;
    /// use token_diagnostics::EventLevel;
    ///
    /// let sink = ConsoleSink::new(EventLevel::Warning).with_colors(false);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn format_line(&self, entry: &LogEntry) -> String {
        let level_str = if self.use_colors {
            format!("{:8}", entry.level.to_str())
                .color(level_color(entry.level))
                .to_string()
        } else {
            format!("{:8}", entry.level.to_str())
        };

        format!("[{}] {}", level_str, entry.message)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(EventLevel::Informational)
    }
}

impl EventSink for ConsoleSink {
    fn is_enabled(&self, level: EventLevel) -> bool {
        level.passes(self.min_level)
    }

    fn log(&self, entry: &LogEntry) {
        let output = self.format_line(entry);

        // Route Error and Critical levels to stderr, others to stdout
        match entry.level {
            EventLevel::Error | EventLevel::Critical => eprintln!("{}", output),
            _ => println!("{}", output),
        }
    }
}

fn level_color(level: EventLevel) -> colored::Color {
    use colored::Color::*;
    match level {
        EventLevel::Verbose => BrightBlack,
        EventLevel::Informational => Green,
        EventLevel::Warning => Yellow,
        EventLevel::Error => Red,
        EventLevel::Critical => BrightRed,
        EventLevel::LogAlways => Cyan,
    }
}

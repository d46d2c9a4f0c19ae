//! JSON-lines sink for machine-readable diagnostics

use crate::core::{EventLevel, EventSink, LogEntry};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes each entry as a single-line JSON object (JSONL format)
///
/// Compatible with log aggregation tools like ELK, Loki, etc. Delivery is
/// best-effort: serialization or write failures are dropped, never
/// surfaced to the logging caller.
pub struct JsonSink<W: Write + Send> {
    min_level: EventLevel,
    writer: Mutex<BufWriter<W>>,
}

impl JsonSink<File> {
    /// Create a sink appending JSON lines to the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P, min_level: EventLevel) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file, min_level))
    }
}

impl<W: Write + Send> JsonSink<W> {
    /// Wrap any writer; entries are buffered until [`flush`](Self::flush).
    pub fn new(writer: W, min_level: EventLevel) -> Self {
        Self {
            min_level,
            writer: Mutex::new(BufWriter::new(writer)),
        }
    }

    /// Flush buffered lines to the underlying writer.
    pub fn flush(&self) {
        let _ = self.writer.lock().flush();
    }
}

impl<W: Write + Send> EventSink for JsonSink<W> {
    fn is_enabled(&self, level: EventLevel) -> bool {
        level.passes(self.min_level)
    }

    fn log(&self, entry: &LogEntry) {
        if let Ok(json) = serde_json::to_string(entry) {
            let mut writer = self.writer.lock();
            let _ = writeln!(writer, "{}", json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_json_sink_writes_jsonl() {
        let dir = tempdir().expect("create temp dir");
        let log_path = dir.path().join("test.jsonl");

        let sink = JsonSink::create(&log_path, EventLevel::Verbose).expect("open sink");
        sink.log(&LogEntry::new(
            EventLevel::Informational,
            "token accepted".to_string(),
        ));
        sink.flush();

        let content = fs::read_to_string(&log_path).expect("read log");
        assert!(content.contains("token accepted"));
        assert!(content.contains("Informational"));
    }

    #[test]
    fn test_json_sink_multiple_entries() {
        let dir = tempdir().expect("create temp dir");
        let log_path = dir.path().join("test_multiple.jsonl");

        let sink = JsonSink::create(&log_path, EventLevel::Verbose).expect("open sink");
        for i in 0..5 {
            sink.log(&LogEntry::new(
                EventLevel::Verbose,
                format!("iteration {}", i),
            ));
        }
        sink.flush();

        let content = fs::read_to_string(&log_path).expect("read log");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);

        // Each line should be valid JSON
        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line).expect("valid JSON line");
            assert!(parsed["message"].is_string());
            assert!(parsed["level"].is_string());
        }
    }

    #[test]
    fn test_json_sink_respects_min_level() {
        let sink = JsonSink::new(Vec::new(), EventLevel::Warning);
        assert!(!sink.is_enabled(EventLevel::Informational));
        assert!(sink.is_enabled(EventLevel::Warning));
        assert!(sink.is_enabled(EventLevel::LogAlways));
    }
}

//! In-memory capturing sinks for tests and embedded hosts

use crate::core::{EventLevel, EventSink, LogEntry, TraceSink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Captures external-sink entries in memory.
///
/// The entry store is shared: take a handle with
/// [`entries_handle`](Self::entries_handle) before moving the sink into a
/// context, and the handle keeps observing captures afterwards.
pub struct MemorySink {
    min_level: EventLevel,
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemorySink {
    pub fn new(min_level: EventLevel) -> Self {
        Self {
            min_level,
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the captured entries.
    pub fn entries_handle(&self) -> Arc<Mutex<Vec<LogEntry>>> {
        Arc::clone(&self.entries)
    }

    /// Snapshot of the captured entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }
}

impl EventSink for MemorySink {
    fn is_enabled(&self, level: EventLevel) -> bool {
        level.passes(self.min_level)
    }

    fn log(&self, entry: &LogEntry) {
        self.entries.lock().push(entry.clone());
    }
}

/// One captured trace delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub level: EventLevel,
    pub inner: Option<String>,
    pub message: String,
}

/// Captures internal-channel deliveries in memory.
pub struct MemoryTraceSink {
    enabled: bool,
    min_level: EventLevel,
    records: Arc<Mutex<Vec<TraceRecord>>>,
}

impl MemoryTraceSink {
    pub fn new(min_level: EventLevel) -> Self {
        Self {
            enabled: true,
            min_level,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Keep the sink attached but report it disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Shared handle to the captured records.
    pub fn records_handle(&self) -> Arc<Mutex<Vec<TraceRecord>>> {
        Arc::clone(&self.records)
    }

    /// Snapshot of the captured records.
    pub fn records(&self) -> Vec<TraceRecord> {
        self.records.lock().clone()
    }
}

impl TraceSink for MemoryTraceSink {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn level(&self) -> EventLevel {
        self.min_level
    }

    fn write(&self, level: EventLevel, inner: Option<&str>, message: &str) {
        self.records.lock().push(TraceRecord {
            level,
            inner: inner.map(str::to_string),
            message: message.to_string(),
        });
    }
}

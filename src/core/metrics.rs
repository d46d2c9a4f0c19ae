//! Diagnostics metrics for observability
//!
//! Provides counters for monitoring diagnostics health: how many entries
//! each sink received, how many typed errors were constructed, and how
//! often the banner fired.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for diagnostics observability
///
/// All counters use relaxed atomics: they are monotonic tallies, not
/// synchronization points.
///
/// # Example
///
/// ```
/// use token_diagnostics::DiagnosticsMetrics;
///
/// let metrics = DiagnosticsMetrics::new();
/// metrics.record_error_constructed();
/// assert_eq!(metrics.errors_constructed(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticsMetrics {
    /// Entries delivered to the internal trace sink
    trace_deliveries: AtomicU64,

    /// Entries delivered to the external sink (banner entries excluded)
    sink_deliveries: AtomicU64,

    /// Typed errors constructed by the factory
    errors_constructed: AtomicU64,

    /// Banner emissions (more than one is possible under races)
    banner_emissions: AtomicU64,
}

impl DiagnosticsMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            trace_deliveries: AtomicU64::new(0),
            sink_deliveries: AtomicU64::new(0),
            errors_constructed: AtomicU64::new(0),
            banner_emissions: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn trace_deliveries(&self) -> u64 {
        self.trace_deliveries.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_deliveries(&self) -> u64 {
        self.sink_deliveries.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn errors_constructed(&self) -> u64 {
        self.errors_constructed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn banner_emissions(&self) -> u64 {
        self.banner_emissions.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_trace_delivery(&self) -> u64 {
        self.trace_deliveries.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_delivery(&self) -> u64 {
        self.sink_deliveries.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_error_constructed(&self) -> u64 {
        self.errors_constructed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_banner_emission(&self) -> u64 {
        self.banner_emissions.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all counters to zero
    ///
    /// Useful for testing or periodic reset.
    pub fn reset(&self) {
        self.trace_deliveries.store(0, Ordering::Relaxed);
        self.sink_deliveries.store(0, Ordering::Relaxed);
        self.errors_constructed.store(0, Ordering::Relaxed);
        self.banner_emissions.store(0, Ordering::Relaxed);
    }
}

impl Default for DiagnosticsMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DiagnosticsMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            trace_deliveries: AtomicU64::new(self.trace_deliveries()),
            sink_deliveries: AtomicU64::new(self.sink_deliveries()),
            errors_constructed: AtomicU64::new(self.errors_constructed()),
            banner_emissions: AtomicU64::new(self.banner_emissions()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = DiagnosticsMetrics::new();
        assert_eq!(metrics.trace_deliveries(), 0);
        assert_eq!(metrics.sink_deliveries(), 0);
        assert_eq!(metrics.errors_constructed(), 0);
        assert_eq!(metrics.banner_emissions(), 0);
    }

    #[test]
    fn test_metrics_record_returns_previous() {
        let metrics = DiagnosticsMetrics::new();
        assert_eq!(metrics.record_sink_delivery(), 0);
        assert_eq!(metrics.sink_deliveries(), 1);
        metrics.record_sink_delivery();
        assert_eq!(metrics.sink_deliveries(), 2);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = DiagnosticsMetrics::new();
        metrics.record_trace_delivery();
        metrics.record_error_constructed();
        metrics.record_banner_emission();

        metrics.reset();

        assert_eq!(metrics.trace_deliveries(), 0);
        assert_eq!(metrics.errors_constructed(), 0);
        assert_eq!(metrics.banner_emissions(), 0);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = DiagnosticsMetrics::new();
        metrics.record_sink_delivery();

        let snapshot = metrics.clone();
        metrics.record_sink_delivery();

        assert_eq!(snapshot.sink_deliveries(), 1);
        assert_eq!(metrics.sink_deliveries(), 2);
    }
}

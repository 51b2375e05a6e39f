//! Engine write metrics
//!
//! Per-call write failures are never returned to logging callers; these
//! counters are where they surface instead.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for records written and writes that failed
///
/// # Example
///
/// ```
/// use leveled_logger::EngineMetrics;
///
/// let metrics = EngineMetrics::new();
/// metrics.record_written();
/// metrics.record_failure();
///
/// assert_eq!(metrics.records_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct EngineMetrics {
    /// Records fully written to the sink
    records_written: AtomicU64,

    /// Records lost to a sink write or flush error
    write_failures: AtomicU64,
}

impl EngineMetrics {
    pub const fn new() -> Self {
        Self {
            records_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record a written entry, returns the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.records_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed write, returns the previous count
    #[inline]
    pub fn record_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for EngineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = EngineMetrics::new();
        assert_eq!(metrics.records_written(), 0);
        assert_eq!(metrics.write_failures(), 0);
    }

    #[test]
    fn test_record_returns_previous() {
        let metrics = EngineMetrics::new();
        assert_eq!(metrics.record_failure(), 0);
        assert_eq!(metrics.write_failures(), 1);
        metrics.record_failure();
        assert_eq!(metrics.write_failures(), 2);
    }
}

//! Basic metrics instrumentation for the profile form.
//!
//! Counters for address saves, duplicate rejections, validation failures and
//! persist calls. Cloning shares the underlying counters.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for form activity.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Addresses appended or updated
    addresses_saved_total: Arc<AtomicU64>,

    /// Saves rejected as duplicates
    duplicates_rejected_total: Arc<AtomicU64>,

    /// Addresses removed from the collection
    addresses_removed_total: Arc<AtomicU64>,

    /// Submissions refused because the profile did not validate
    validation_failures_total: Arc<AtomicU64>,

    /// Calls to the persist collaborator
    persist_calls_total: Arc<AtomicU64>,

    /// Persist calls that failed
    persist_errors_total: Arc<AtomicU64>,

    /// Total time spent in persist calls, in milliseconds
    persist_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            addresses_saved_total: Arc::new(AtomicU64::new(0)),
            duplicates_rejected_total: Arc::new(AtomicU64::new(0)),
            addresses_removed_total: Arc::new(AtomicU64::new(0)),
            validation_failures_total: Arc::new(AtomicU64::new(0)),
            persist_calls_total: Arc::new(AtomicU64::new(0)),
            persist_errors_total: Arc::new(AtomicU64::new(0)),
            persist_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_address_saved(&self) {
        self.addresses_saved_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_duplicate_rejected(&self) {
        self.duplicates_rejected_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_address_removed(&self) {
        self.addresses_removed_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a persist call with duration.
    pub fn record_persist(&self, duration: Duration) {
        self.persist_calls_total.fetch_add(1, Ordering::Relaxed);
        self.persist_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_persist_error(&self) {
        self.persist_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn addresses_saved_total(&self) -> u64 {
        self.addresses_saved_total.load(Ordering::Relaxed)
    }

    pub fn duplicates_rejected_total(&self) -> u64 {
        self.duplicates_rejected_total.load(Ordering::Relaxed)
    }

    pub fn addresses_removed_total(&self) -> u64 {
        self.addresses_removed_total.load(Ordering::Relaxed)
    }

    pub fn validation_failures_total(&self) -> u64 {
        self.validation_failures_total.load(Ordering::Relaxed)
    }

    pub fn persist_calls_total(&self) -> u64 {
        self.persist_calls_total.load(Ordering::Relaxed)
    }

    pub fn persist_errors_total(&self) -> u64 {
        self.persist_errors_total.load(Ordering::Relaxed)
    }

    pub fn persist_duration_total_ms(&self) -> u64 {
        self.persist_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average persist duration in milliseconds.
    pub fn persist_duration_avg_ms(&self) -> f64 {
        let total = self.persist_duration_total_ms();
        let count = self.persist_calls_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.addresses_saved_total.store(0, Ordering::Relaxed);
        self.duplicates_rejected_total.store(0, Ordering::Relaxed);
        self.addresses_removed_total.store(0, Ordering::Relaxed);
        self.validation_failures_total.store(0, Ordering::Relaxed);
        self.persist_calls_total.store(0, Ordering::Relaxed);
        self.persist_errors_total.store(0, Ordering::Relaxed);
        self.persist_duration_total_ms.store(0, Ordering::Relaxed);
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            addresses_saved_total: self.addresses_saved_total(),
            duplicates_rejected_total: self.duplicates_rejected_total(),
            addresses_removed_total: self.addresses_removed_total(),
            validation_failures_total: self.validation_failures_total(),
            persist_calls_total: self.persist_calls_total(),
            persist_errors_total: self.persist_errors_total(),
            persist_duration_avg_ms: self.persist_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub addresses_saved_total: u64,
    pub duplicates_rejected_total: u64,
    pub addresses_removed_total: u64,
    pub validation_failures_total: u64,
    pub persist_calls_total: u64,
    pub persist_errors_total: u64,
    pub persist_duration_avg_ms: f64,
}

/// Helper for timing persist calls.
pub struct PersistTimer {
    start: Instant,
    metrics: Metrics,
}

impl PersistTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    pub fn complete(self) {
        self.metrics.record_persist(self.start.elapsed());
    }

    pub fn complete_with_error(self) {
        self.metrics.record_persist(self.start.elapsed());
        self.metrics.record_persist_error();
    }
}

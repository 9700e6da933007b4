//! Counters for lookup traffic and autofill outcomes.
//!
//! Shared by the lookup client (request counts and durations) and the form
//! session (how many lookup results were applied or discarded as stale).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for lookups and autofill.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// Total number of lookup requests made
    lookups_total: Arc<AtomicU64>,

    /// Total number of failed lookups (transport, status, or decode)
    lookup_errors_total: Arc<AtomicU64>,

    /// Total duration of all lookups in milliseconds
    lookup_duration_total_ms: Arc<AtomicU64>,

    /// Lookup results written into a form
    autofills_applied_total: Arc<AtomicU64>,

    /// Lookup results dropped because the field changed meanwhile
    stale_results_total: Arc<AtomicU64>,
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup with duration.
    pub fn record_lookup(&self, duration: Duration) {
        self.lookups_total.fetch_add(1, Ordering::Relaxed);
        self.lookup_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed lookup.
    pub fn record_lookup_error(&self) {
        self.lookup_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_autofill_applied(&self) {
        self.autofills_applied_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale_result(&self) {
        self.stale_results_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups_total(&self) -> u64 {
        self.lookups_total.load(Ordering::Relaxed)
    }

    pub fn lookup_errors_total(&self) -> u64 {
        self.lookup_errors_total.load(Ordering::Relaxed)
    }

    pub fn lookup_duration_total_ms(&self) -> u64 {
        self.lookup_duration_total_ms.load(Ordering::Relaxed)
    }

    pub fn autofills_applied_total(&self) -> u64 {
        self.autofills_applied_total.load(Ordering::Relaxed)
    }

    pub fn stale_results_total(&self) -> u64 {
        self.stale_results_total.load(Ordering::Relaxed)
    }

    /// Get average lookup duration in milliseconds.
    pub fn lookup_duration_avg_ms(&self) -> f64 {
        let total = self.lookup_duration_total_ms();
        let count = self.lookups_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            lookups_total: self.lookups_total(),
            lookup_errors_total: self.lookup_errors_total(),
            lookup_duration_avg_ms: self.lookup_duration_avg_ms(),
            autofills_applied_total: self.autofills_applied_total(),
            stale_results_total: self.stale_results_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub lookups_total: u64,
    pub lookup_errors_total: u64,
    pub lookup_duration_avg_ms: f64,
    pub autofills_applied_total: u64,
    pub stale_results_total: u64,
}

/// Helper for timing a single lookup request.
pub struct LookupTimer {
    start: Instant,
    metrics: Metrics,
}

impl LookupTimer {
    /// Start timing a lookup.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_lookup(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_lookup(self.start.elapsed());
        self.metrics.record_lookup_error();
    }
}

//! In-process metrics collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// A counter metric.
#[derive(Debug, Default)]
pub struct Counter(AtomicU64);

impl Counter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_by(&self, n: u64) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// A gauge metric (can go up or down).
#[derive(Debug, Default)]
pub struct Gauge(AtomicU64);

impl Gauge {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    pub fn set(&self, val: u64) {
        self.0.store(val, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Histogram for play-time tracking.
#[derive(Debug)]
pub struct Histogram {
    /// Buckets: 10s, 30s, 1m, 2m, 5m, 10m, 15m, 30m, 1h, 2h, 4h
    buckets: [AtomicU64; 11],
    sum: AtomicU64,
    count: AtomicU64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    const BUCKET_BOUNDS: [u64; 11] = [10, 30, 60, 120, 300, 600, 900, 1800, 3600, 7200, 14400];

    pub fn new() -> Self {
        Self {
            buckets: Default::default(),
            sum: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Records a value in seconds.
    pub fn observe(&self, secs: u64) {
        self.sum.fetch_add(secs, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);

        for (i, &bound) in Self::BUCKET_BOUNDS.iter().enumerate() {
            if secs <= bound {
                self.buckets[i].fetch_add(1, Ordering::Relaxed);
                return;
            }
        }
        // Value exceeds all buckets, add to last
        self.buckets[10].fetch_add(1, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    pub fn sum(&self) -> u64 {
        self.sum.load(Ordering::Relaxed)
    }

    pub fn mean(&self) -> f64 {
        let count = self.count();
        if count == 0 {
            0.0
        } else {
            self.sum() as f64 / count as f64
        }
    }

    /// Returns bucket counts.
    pub fn buckets(&self) -> Vec<(u64, u64)> {
        Self::BUCKET_BOUNDS
            .iter()
            .zip(self.buckets.iter())
            .map(|(&bound, count)| (bound, count.load(Ordering::Relaxed)))
            .collect()
    }
}

/// Collected metrics for the tutor engine.
#[derive(Debug, Default)]
pub struct Metrics {
    // Session lifecycle
    pub sessions_started: Counter,
    pub sessions_completed: Counter,
    pub sessions_discarded: Counter,
    pub attempts_recorded: Counter,
    pub attempts_ignored: Counter,

    // Personalization
    pub hints_served: Counter,
    pub celebrations_served: Counter,
    pub suggestions_served: Counter,
    pub reports_generated: Counter,

    // Persistence
    pub store_saves: Counter,
    pub store_save_errors: Counter,

    // Play time
    pub session_duration_secs: Histogram,

    // Gauges
    pub active_sessions: Gauge,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A snapshot of metrics at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub timestamp: DateTime<Utc>,
    pub sessions_started: u64,
    pub sessions_completed: u64,
    pub sessions_discarded: u64,
    pub attempts_recorded: u64,
    pub attempts_ignored: u64,
    pub hints_served: u64,
    pub celebrations_served: u64,
    pub suggestions_served: u64,
    pub reports_generated: u64,
    pub store_saves: u64,
    pub store_save_errors: u64,
    pub session_duration_mean_secs: f64,
    pub session_duration_buckets: Vec<(u64, u64)>,
    pub active_sessions: u64,
}

impl Metrics {
    /// Takes a snapshot of current metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            timestamp: Utc::now(),
            sessions_started: self.sessions_started.get(),
            sessions_completed: self.sessions_completed.get(),
            sessions_discarded: self.sessions_discarded.get(),
            attempts_recorded: self.attempts_recorded.get(),
            attempts_ignored: self.attempts_ignored.get(),
            hints_served: self.hints_served.get(),
            celebrations_served: self.celebrations_served.get(),
            suggestions_served: self.suggestions_served.get(),
            reports_generated: self.reports_generated.get(),
            store_saves: self.store_saves.get(),
            store_save_errors: self.store_save_errors.get(),
            session_duration_mean_secs: self.session_duration_secs.mean(),
            session_duration_buckets: self.session_duration_secs.buckets(),
            active_sessions: self.active_sessions.get(),
        }
    }
}

/// Global metrics registry.
pub static METRICS: std::sync::LazyLock<Metrics> = std::sync::LazyLock::new(Metrics::new);

/// Get the global metrics instance.
pub fn metrics() -> &'static Metrics {
    &METRICS
}

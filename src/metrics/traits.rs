//! # Metrics Trait Hierarchy
//!
//! Recording, snapshotting and export are separate responsibilities:
//!
//! ```text
//!   ┌──────────────────────────────┐   ┌──────────────────────────────┐
//!   │ TrackerMetricsRecorder       │   │ TrackerMetricsReadRecorder   │
//!   │ visit/admit/promote/evict    │   │ recency_rank/contains        │
//!   │ (&mut self, write path)      │   │ (&self, read path)           │
//!   └──────────────┬───────────────┘   └──────────────┬───────────────┘
//!                  └───────────────┬──────────────────┘
//!                                  ▼
//!                    ┌──────────────────────────────┐
//!                    │ MetricsSnapshotProvider<S>   │──► MetricsExporter<S>
//!                    └──────────────────────────────┘
//! ```

/// Write-path counters for a recency tracker.
pub trait TrackerMetricsRecorder {
    fn record_visit_call(&mut self);
    fn record_visit_hit(&mut self);
    fn record_visit_miss(&mut self);
    fn record_visit_scan_steps(&mut self, steps: u64);
    fn record_admission(&mut self);
    fn record_eviction(&mut self);
    fn record_underflow(&mut self);
    fn record_reset(&mut self);
}

/// Read-path counters, recorded through a shared reference.
pub trait TrackerMetricsReadRecorder {
    fn record_recency_rank_call(&self);
    fn record_recency_rank_found(&self);
    fn record_recency_rank_scan_steps(&self, steps: u64);
    fn record_contains_call(&self);
}

/// Produce a point-in-time copy of the counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}

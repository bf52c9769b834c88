use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::TrackerMetricsSnapshot;
use crate::metrics::traits::{TrackerMetricsReadRecorder, TrackerMetricsRecorder};

#[derive(Debug, Default)]
pub struct TrackerMetrics {
    pub visit_calls: u64,
    pub visit_hits: u64,
    pub visit_misses: u64,
    pub visit_scan_steps: u64,
    pub admissions: u64,
    pub evictions: u64,
    pub underflows: u64,
    pub resets: u64,
    pub recency_rank_calls: MetricsCell,
    pub recency_rank_found: MetricsCell,
    pub recency_rank_scan_steps: MetricsCell,
    pub contains_calls: MetricsCell,
}

impl TrackerMetrics {
    pub fn snapshot(&self, len: usize, capacity: usize) -> TrackerMetricsSnapshot {
        TrackerMetricsSnapshot {
            visit_calls: self.visit_calls,
            visit_hits: self.visit_hits,
            visit_misses: self.visit_misses,
            visit_scan_steps: self.visit_scan_steps,
            admissions: self.admissions,
            evictions: self.evictions,
            underflows: self.underflows,
            resets: self.resets,
            recency_rank_calls: self.recency_rank_calls.get(),
            recency_rank_found: self.recency_rank_found.get(),
            recency_rank_scan_steps: self.recency_rank_scan_steps.get(),
            contains_calls: self.contains_calls.get(),
            len,
            capacity,
        }
    }
}

impl TrackerMetrics {
    /// Zeroes every counter in place.
    pub fn reset(&mut self) {
        self.visit_calls = 0;
        self.visit_hits = 0;
        self.visit_misses = 0;
        self.visit_scan_steps = 0;
        self.admissions = 0;
        self.evictions = 0;
        self.underflows = 0;
        self.resets = 0;
        self.recency_rank_calls.reset();
        self.recency_rank_found.reset();
        self.recency_rank_scan_steps.reset();
        self.contains_calls.reset();
    }
}

impl TrackerMetricsRecorder for TrackerMetrics {
    fn record_visit_call(&mut self) {
        self.visit_calls += 1;
    }

    fn record_visit_hit(&mut self) {
        self.visit_hits += 1;
    }

    fn record_visit_miss(&mut self) {
        self.visit_misses += 1;
    }

    fn record_visit_scan_steps(&mut self, steps: u64) {
        self.visit_scan_steps += steps;
    }

    fn record_admission(&mut self) {
        self.admissions += 1;
    }

    fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    fn record_underflow(&mut self) {
        self.underflows += 1;
    }

    fn record_reset(&mut self) {
        self.resets += 1;
    }
}

impl TrackerMetricsReadRecorder for TrackerMetrics {
    fn record_recency_rank_call(&self) {
        self.recency_rank_calls.incr();
    }

    fn record_recency_rank_found(&self) {
        self.recency_rank_found.incr();
    }

    fn record_recency_rank_scan_steps(&self, steps: u64) {
        self.recency_rank_scan_steps.add(steps);
    }

    fn record_contains_call(&self) {
        self.contains_calls.incr();
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrackerMetricsSnapshot {
    pub visit_calls: u64,
    pub visit_hits: u64,   // promotions of an already tracked id
    pub visit_misses: u64, // admissions + evictions + underflows
    pub visit_scan_steps: u64,

    pub admissions: u64,
    pub evictions: u64,
    pub underflows: u64,
    pub resets: u64,

    pub recency_rank_calls: u64,
    pub recency_rank_found: u64,
    pub recency_rank_scan_steps: u64,
    pub contains_calls: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}

impl TrackerMetricsSnapshot {
    /// Fraction of visits that promoted an already tracked id.
    pub fn hit_ratio(&self) -> f64 {
        if self.visit_calls == 0 {
            0.0
        } else {
            self.visit_hits as f64 / self.visit_calls as f64
        }
    }
}

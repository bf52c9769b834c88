use std::cell::RefCell;
use std::io::Write;

use crate::metrics::snapshot::TrackerMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for tracker metrics snapshots.
///
/// Writes the Prometheus text exposition format. Write failures are logged
/// and otherwise ignored; exporting never affects the tracker.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write> {
    prefix: String,
    writer: RefCell<W>,
}

impl<W: Write> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: RefCell::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self.writer.borrow_mut();
        let result = writeln!(writer, "# TYPE {} {}", name, kind)
            .and_then(|_| writeln!(writer, "{} {}", name, value));
        if let Err(err) = result {
            log::warn!("metrics: failed to write {}: {}", name, err);
        }
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write> MetricsExporter<TrackerMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &TrackerMetricsSnapshot) {
        let counters = [
            ("visit_calls_total", snapshot.visit_calls),
            ("visit_hits_total", snapshot.visit_hits),
            ("visit_misses_total", snapshot.visit_misses),
            ("visit_scan_steps_total", snapshot.visit_scan_steps),
            ("admissions_total", snapshot.admissions),
            ("evictions_total", snapshot.evictions),
            ("underflows_total", snapshot.underflows),
            ("resets_total", snapshot.resets),
            ("recency_rank_calls_total", snapshot.recency_rank_calls),
            ("recency_rank_found_total", snapshot.recency_rank_found),
            (
                "recency_rank_scan_steps_total",
                snapshot.recency_rank_scan_steps,
            ),
            ("contains_calls_total", snapshot.contains_calls),
        ];
        for (suffix, value) in counters {
            self.write_metric("counter", suffix, value);
        }
        self.write_metric("gauge", "len", snapshot.len as u64);
        self.write_metric("gauge", "capacity", snapshot.capacity as u64);
    }
}

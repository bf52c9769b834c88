//! Tracker counters exported in Prometheus text format.
//!
//! Run with: cargo run --example metrics --features metrics

use recentkit::metrics::exporter::PrometheusTextExporter;
use recentkit::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
use recentkit::policy::recent::RecentTracker;

fn main() {
    let mut tracker = RecentTracker::new(8);
    for i in 0..200u32 {
        // mostly a hot set of 6 ids, with an occasional cold one
        let id = if i % 5 == 0 { 100 + i } else { i % 6 };
        let _ = tracker.visit(id);
    }

    let snapshot = tracker.snapshot();
    println!("hit ratio: {:.2}", snapshot.hit_ratio());

    let exporter = PrometheusTextExporter::new("recentkit", Vec::new());
    exporter.export(&snapshot);
    let text = String::from_utf8_lossy(&exporter.into_inner()).into_owned();
    print!("{}", text);
}

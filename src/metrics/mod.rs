//! Observability counters for recency trackers (feature `metrics`).
//!
//! Recording, snapshotting and exporting are split across small traits in
//! [`traits`]; [`metrics_impl::TrackerMetrics`] is the recorder embedded in
//! [`RecentTracker`](crate::policy::recent::RecentTracker).

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

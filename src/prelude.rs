pub use crate::builder::{TrackerBuilder, ZeroCapacity};
pub use crate::ds::{ListId, Position, PositionalList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError, ListError, PositionFault};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::TrackerMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider};
pub use crate::policy::recent::{CustomerTracker, RecentTracker};
pub use crate::traits::{RecencyPolicy, Visit};

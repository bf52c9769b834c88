//! recentkit: recency-ordered registries built on an arena-backed
//! positional list.
//!
//! - [`ds::PositionalList`]: sentinel-bounded doubly linked list addressed
//!   by validated [`ds::Position`] handles.
//! - [`policy::recent::RecentTracker`]: the last `capacity` distinct ids
//!   visited, most recent first.
//! - [`builder::TrackerBuilder`]: validated tracker construction.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;

//! Recency policies.
//!
//! - [`recent`]: bounded linear-scan LRU registry of distinct ids.

pub mod recent;

//! Validated construction of recency trackers.
//!
//! ## Example
//!
//! ```rust
//! use recentkit::builder::TrackerBuilder;
//!
//! let mut tracker = TrackerBuilder::new(3)
//!     .preallocate(true)
//!     .build::<u64>()
//!     .unwrap();
//! tracker.visit(7).unwrap();
//! assert_eq!(tracker.most_recent(), Some(&7));
//! ```

use log::debug;

use crate::error::ConfigError;
use crate::policy::recent::RecentTracker;

/// What [`TrackerBuilder::build`] does with a capacity of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroCapacity {
    /// Build the tracker anyway; every visit fails with
    /// [`ListError::EmptyUnderflow`](crate::error::ListError::EmptyUnderflow).
    #[default]
    Underflow,
    /// Refuse to build, returning a [`ConfigError`].
    Reject,
}

/// Builder for [`RecentTracker`] instances.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    capacity: usize,
    preallocate: bool,
    zero_capacity: ZeroCapacity,
}

impl TrackerBuilder {
    /// Create a new tracker builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            preallocate: false,
            zero_capacity: ZeroCapacity::default(),
        }
    }

    /// Reserve node storage for `capacity` ids when the tracker is built. The
    /// storage is kept across resets.
    pub fn preallocate(mut self, preallocate: bool) -> Self {
        self.preallocate = preallocate;
        self
    }

    /// Choose how a zero capacity is handled.
    pub fn zero_capacity(mut self, zero_capacity: ZeroCapacity) -> Self {
        self.zero_capacity = zero_capacity;
        self
    }

    /// Build a tracker for ids of type `T`.
    ///
    /// # Errors
    ///
    /// - capacity is zero and [`ZeroCapacity::Reject`] was chosen
    /// - preallocation was requested for a capacity whose node storage
    ///   cannot be sized
    ///
    /// # Example
    ///
    /// ```rust
    /// use recentkit::builder::{TrackerBuilder, ZeroCapacity};
    /// use recentkit::error::ListError;
    ///
    /// // Zero capacity builds by default, but every visit underflows.
    /// let mut tracker = TrackerBuilder::new(0).build::<&str>().unwrap();
    /// assert_eq!(tracker.visit("a"), Err(ListError::EmptyUnderflow));
    ///
    /// // Or refuse it up front.
    /// assert!(TrackerBuilder::new(0)
    ///     .zero_capacity(ZeroCapacity::Reject)
    ///     .build::<&str>()
    ///     .is_err());
    /// ```
    pub fn build<T: Eq>(self) -> Result<RecentTracker<T>, ConfigError> {
        if self.capacity == 0 && self.zero_capacity == ZeroCapacity::Reject {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }

        debug!(
            "builder: tracker capacity={} preallocate={} zero_capacity={:?}",
            self.capacity, self.preallocate, self.zero_capacity
        );
        if !self.preallocate {
            return Ok(RecentTracker::new(self.capacity));
        }
        RecentTracker::try_with_preallocation(self.capacity).map_err(|err| {
            ConfigError::new(format!(
                "capacity {} is too large to preallocate: {}",
                self.capacity, err
            ))
        })
    }
}

//! # Recent-Visitor Tracker (linear-scan LRU)
//!
//! Keeps the last `capacity` distinct ids that were visited, ordered from
//! most to least recent. A visit of a tracked id promotes it to the front; a
//! visit of a new id is admitted at the front, evicting the least recent id
//! first when the tracker is full.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────────────┐
//!   │                     RecentTracker<T>                               │
//!   │                                                                    │
//!   │   capacity: usize (fixed)                                          │
//!   │                                                                    │
//!   │   ┌────────────────────────────────────────────────────────────┐   │
//!   │   │  PositionalList<T> (recency order)                         │   │
//!   │   │                                                            │   │
//!   │   │  [head] ◄──► [D] ◄──► [E] ◄──► [C] ◄──► [B] ◄──► [tail]    │   │
//!   │   │              MRU                        LRU                │   │
//!   │   └────────────────────────────────────────────────────────────┘   │
//!   └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Visit Flow
//!
//! ```text
//!   visit(id):
//!     1. scan front→back for id                        O(len)
//!     2a. found at p:        remove(p); add_first(id)  Promoted
//!     2b. absent, len == cap: remove_last(); add_first(id)  Evicted
//!     2c. absent, len <  cap: add_first(id)            Admitted
//! ```
//!
//! Example with capacity 4 and visits A B C D E D F:
//!
//! ```text
//!   A  → [A]
//!   B  → [B, A]
//!   C  → [C, B, A]
//!   D  → [D, C, B, A]
//!   E  → [E, D, C, B]      A evicted
//!   D  → [D, E, C, B]      D promoted from rank 1
//!   F  → [F, D, E, C]      B evicted
//! ```
//!
//! ## Capacity 0
//!
//! A zero-capacity tracker is always full and always empty, so every visit
//! tries to evict from an empty list and fails with
//! [`ListError::EmptyUnderflow`]. The tracker is unchanged by the failed
//! visit. Use [`TrackerBuilder`](crate::builder::TrackerBuilder) with
//! [`ZeroCapacity::Reject`](crate::builder::ZeroCapacity::Reject) to refuse
//! such trackers up front.
//!
//! ## Thread Safety
//!
//! `RecentTracker` has no internal synchronization. Every mutation takes
//! `&mut self`; share it across threads only behind an external lock.
//!
//! ## Example Usage
//!
//! ```
//! use recentkit::policy::recent::CustomerTracker;
//! use recentkit::traits::Visit;
//!
//! let mut customers = CustomerTracker::new(2);
//! customers.visit("alice".to_string()).unwrap();
//! customers.visit("bob".to_string()).unwrap();
//!
//! let outcome = customers.visit("carol".to_string()).unwrap();
//! assert_eq!(outcome, Visit::Evicted("alice".to_string()));
//!
//! let order: Vec<&str> = customers.iter().map(String::as_str).collect();
//! assert_eq!(order, ["carol", "bob"]);
//! ```

use std::collections::TryReserveError;

use log::{debug, trace, warn};

use crate::ds::positional_list::{Iter, Position, PositionalList};
use crate::error::ListError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::TrackerMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::TrackerMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsReset, MetricsSnapshotProvider, TrackerMetricsReadRecorder, TrackerMetricsRecorder,
};
use crate::traits::{RecencyPolicy, Visit};

/// Tracker of the most recent distinct customer names.
pub type CustomerTracker = RecentTracker<String>;

/// Bounded registry of distinct ids ordered by recency of visit.
#[derive(Debug)]
pub struct RecentTracker<T> {
    list: PositionalList<T>,
    capacity: usize,
    preallocate: bool,
    #[cfg(feature = "metrics")]
    metrics: TrackerMetrics,
}

impl<T: Eq> RecentTracker<T> {
    /// Creates an empty tracker holding at most `capacity` ids.
    ///
    /// # Example
    /// ```
    /// use recentkit::policy::recent::RecentTracker;
    ///
    /// let tracker: RecentTracker<u32> = RecentTracker::new(4);
    /// assert_eq!(tracker.capacity(), 4);
    /// assert!(tracker.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::from_parts(capacity, false)
    }

    /// Creates an empty tracker whose node storage for `capacity` ids is
    /// reserved up front and kept across [`reset`](Self::reset).
    ///
    /// # Panics
    ///
    /// Panics if storage for `capacity` nodes cannot be sized; see
    /// [`try_with_preallocation`](Self::try_with_preallocation).
    pub fn with_preallocation(capacity: usize) -> Self {
        Self::from_parts(capacity, true)
    }

    /// Like [`with_preallocation`](Self::with_preallocation), but reports
    /// a capacity whose node storage cannot be allocated.
    pub fn try_with_preallocation(capacity: usize) -> Result<Self, TryReserveError> {
        let list = PositionalList::try_with_capacity(capacity)?;
        Ok(Self::with_list(list, capacity, true))
    }

    fn from_parts(capacity: usize, preallocate: bool) -> Self {
        Self::with_list(Self::fresh_list(capacity, preallocate), capacity, preallocate)
    }

    fn with_list(list: PositionalList<T>, capacity: usize, preallocate: bool) -> Self {
        Self {
            list,
            capacity,
            preallocate,
            #[cfg(feature = "metrics")]
            metrics: TrackerMetrics::default(),
        }
    }

    fn fresh_list(capacity: usize, preallocate: bool) -> PositionalList<T> {
        if preallocate {
            PositionalList::with_capacity(capacity)
        } else {
            PositionalList::new()
        }
    }

    /// Returns the maximum number of tracked ids.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of tracked ids.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if no ids are tracked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Records a visit of `id`.
    ///
    /// Promotes a tracked id to the front, or admits a new one at the front
    /// after evicting the least recent id when full. Fails with
    /// [`ListError::EmptyUnderflow`] only for a zero-capacity tracker, in
    /// which case nothing changes.
    pub fn visit(&mut self, id: T) -> Result<Visit<T>, ListError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_visit_call();

        let found = self.find(&id);

        #[cfg(feature = "metrics")]
        {
            let steps = found.map_or(self.list.len(), |(rank, _)| rank + 1);
            self.metrics.record_visit_scan_steps(steps as u64);
        }

        if let Some((rank, position)) = found {
            self.list.remove(position)?;
            self.list.add_first(id);
            #[cfg(feature = "metrics")]
            self.metrics.record_visit_hit();
            trace!("recent: promoted id from rank {} (len {})", rank, self.list.len());
            return Ok(Visit::Promoted {
                previous_rank: rank,
            });
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_visit_miss();

        if self.list.len() == self.capacity {
            let evicted = match self.list.remove_last() {
                Ok(evicted) => evicted,
                Err(err) => {
                    #[cfg(feature = "metrics")]
                    self.metrics.record_underflow();
                    warn!(
                        "recent: visit rejected, nothing to evict at capacity {}",
                        self.capacity
                    );
                    return Err(err);
                },
            };
            self.list.add_first(id);
            #[cfg(feature = "metrics")]
            self.metrics.record_eviction();
            debug!("recent: evicted least recent id at capacity {}", self.capacity);
            return Ok(Visit::Evicted(evicted));
        }

        self.list.add_first(id);
        #[cfg(feature = "metrics")]
        self.metrics.record_admission();
        trace!(
            "recent: admitted id (len {}/{})",
            self.list.len(),
            self.capacity
        );
        Ok(Visit::Admitted)
    }

    /// Discards every tracked id and starts over with an empty list under a
    /// new [`ListId`](crate::ds::ListId). A preallocated tracker empties its
    /// list in place and keeps the reserved storage.
    pub fn reset(&mut self) {
        let discarded = self.list.len();
        if self.preallocate {
            self.list.renew();
        } else {
            self.list = PositionalList::new();
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_reset();
        debug!("recent: reset discarded {} ids", discarded);
    }

    /// Returns `true` if `id` is currently tracked.
    pub fn contains(&self, id: &T) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_contains_call();
        self.list.iter().any(|tracked| tracked == id)
    }

    /// Returns the rank of `id` (0 = most recent), if tracked.
    ///
    /// # Example
    /// ```
    /// use recentkit::policy::recent::RecentTracker;
    ///
    /// let mut tracker = RecentTracker::new(3);
    /// for id in [1, 2, 3] {
    ///     tracker.visit(id).unwrap();
    /// }
    /// assert_eq!(tracker.recency_rank(&3), Some(0));
    /// assert_eq!(tracker.recency_rank(&1), Some(2));
    /// assert_eq!(tracker.recency_rank(&9), None);
    /// ```
    pub fn recency_rank(&self, id: &T) -> Option<usize> {
        let found = self.list.iter().position(|tracked| tracked == id);

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_recency_rank_call();
            let steps = found.map_or(self.list.len(), |rank| rank + 1);
            self.metrics.record_recency_rank_scan_steps(steps as u64);
            if found.is_some() {
                self.metrics.record_recency_rank_found();
            }
        }

        found
    }

    /// Returns the most recently visited id.
    pub fn most_recent(&self) -> Option<&T> {
        self.list.front()
    }

    /// Returns the least recently visited id (the next eviction victim).
    pub fn least_recent(&self) -> Option<&T> {
        self.list.back()
    }

    /// Returns the live recency-ordered view, most recent first.
    ///
    /// The view is borrowed, not copied; it cannot be mutated through this
    /// reference. Use [`to_vec`](Self::to_vec) for an owned snapshot.
    pub fn list(&self) -> &PositionalList<T> {
        &self.list
    }

    /// Returns an iterator over tracked ids, most recent first.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Copies the tracked ids into a `Vec`, most recent first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }

    fn find(&self, id: &T) -> Option<(usize, Position)> {
        self.list
            .entries()
            .enumerate()
            .find(|(_, (_, tracked))| *tracked == id)
            .map(|(rank, (position, _))| (rank, position))
    }

    /// Validates internal invariants (debug-only).
    #[cfg(debug_assertions)]
    pub fn check_invariants(&self) -> Result<(), crate::error::InvariantError>
    where
        T: std::hash::Hash,
    {
        use crate::error::InvariantError;
        use rustc_hash::FxHashSet;

        self.list.check_invariants()?;

        if self.list.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.list.len(),
                self.capacity
            )));
        }

        let mut seen = FxHashSet::default();
        for (rank, id) in self.list.iter().enumerate() {
            if !seen.insert(id) {
                return Err(InvariantError::new(format!(
                    "duplicate id at rank {}",
                    rank
                )));
            }
        }
        Ok(())
    }
}

#[cfg(feature = "metrics")]
impl<T: Eq> RecentTracker<T> {
    /// Returns a point-in-time copy of the tracker counters.
    pub fn metrics_snapshot(&self) -> TrackerMetricsSnapshot {
        self.metrics.snapshot(self.list.len(), self.capacity)
    }
}

#[cfg(feature = "metrics")]
impl<T: Eq> MetricsSnapshotProvider<TrackerMetricsSnapshot> for RecentTracker<T> {
    fn snapshot(&self) -> TrackerMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<T> MetricsReset for RecentTracker<T> {
    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

impl<T: Eq> RecencyPolicy<T> for RecentTracker<T> {
    fn visit(&mut self, id: T) -> Result<Visit<T>, ListError> {
        RecentTracker::visit(self, id)
    }

    fn reset(&mut self) {
        RecentTracker::reset(self)
    }

    fn contains(&self, id: &T) -> bool {
        RecentTracker::contains(self, id)
    }

    fn recency_rank(&self, id: &T) -> Option<usize> {
        RecentTracker::recency_rank(self, id)
    }

    fn most_recent(&self) -> Option<&T> {
        RecentTracker::most_recent(self)
    }

    fn least_recent(&self) -> Option<&T> {
        RecentTracker::least_recent(self)
    }

    fn len(&self) -> usize {
        RecentTracker::len(self)
    }

    fn capacity(&self) -> usize {
        RecentTracker::capacity(self)
    }
}

impl<'a, T: Eq> IntoIterator for &'a RecentTracker<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order<T: Clone + Eq>(tracker: &RecentTracker<T>) -> Vec<T> {
        tracker.to_vec()
    }

    // ==============================================
    // CORRECTNESS TESTS MODULE
    // ==============================================
    mod correctness {
        use super::*;

        #[test]
        fn new_tracker_is_empty() {
            let tracker: RecentTracker<&str> = RecentTracker::new(4);
            assert_eq!(tracker.capacity(), 4);
            assert_eq!(tracker.len(), 0);
            assert!(tracker.is_empty());
            assert_eq!(tracker.most_recent(), None);
            assert_eq!(tracker.least_recent(), None);
            tracker.check_invariants().unwrap();
        }

        #[test]
        fn customer_scenario_capacity_four() {
            let mut tracker = RecentTracker::new(4);
            let steps: [(&str, &[&str]); 7] = [
                ("A", &["A"]),
                ("B", &["B", "A"]),
                ("C", &["C", "B", "A"]),
                ("D", &["D", "C", "B", "A"]),
                ("E", &["E", "D", "C", "B"]),
                ("D", &["D", "E", "C", "B"]),
                ("F", &["F", "D", "E", "C"]),
            ];
            for (id, expected) in steps {
                tracker.visit(id).unwrap();
                assert_eq!(order(&tracker), expected.to_vec(), "after visiting {}", id);
                tracker.check_invariants().unwrap();
            }
        }

        #[test]
        fn visit_reports_outcomes() {
            let mut tracker = RecentTracker::new(2);
            assert_eq!(tracker.visit("a"), Ok(Visit::Admitted));
            assert_eq!(tracker.visit("b"), Ok(Visit::Admitted));
            assert_eq!(
                tracker.visit("a"),
                Ok(Visit::Promoted { previous_rank: 1 })
            );
            assert_eq!(tracker.visit("c"), Ok(Visit::Evicted("b")));
            assert_eq!(order(&tracker), vec!["c", "a"]);
        }

        #[test]
        fn promotion_keeps_len() {
            let mut tracker = RecentTracker::new(3);
            for id in [1, 2, 3] {
                tracker.visit(id).unwrap();
            }
            tracker.visit(1).unwrap();
            assert_eq!(tracker.len(), 3);
            assert_eq!(tracker.recency_rank(&1), Some(0));
            assert_eq!(order(&tracker), vec![1, 3, 2]);
        }

        #[test]
        fn revisiting_front_is_a_hit_at_rank_zero() {
            let mut tracker = RecentTracker::new(3);
            tracker.visit('x').unwrap();
            tracker.visit('y').unwrap();
            assert_eq!(
                tracker.visit('y'),
                Ok(Visit::Promoted { previous_rank: 0 })
            );
            assert_eq!(order(&tracker), vec!['y', 'x']);
        }

        #[test]
        fn eviction_removes_previous_back() {
            let mut tracker = RecentTracker::new(2);
            tracker.visit(10).unwrap();
            tracker.visit(20).unwrap();
            let back = *tracker.least_recent().unwrap();
            tracker.visit(30).unwrap();
            assert!(!tracker.contains(&back));
            assert_eq!(tracker.most_recent(), Some(&30));
            assert_eq!(tracker.len(), 2);
        }

        #[test]
        fn capacity_one_replaces_every_new_id() {
            let mut tracker = RecentTracker::new(1);
            assert_eq!(tracker.visit("a"), Ok(Visit::Admitted));
            assert_eq!(tracker.visit("a"), Ok(Visit::Promoted { previous_rank: 0 }));
            assert_eq!(tracker.visit("b"), Ok(Visit::Evicted("a")));
            assert_eq!(order(&tracker), vec!["b"]);
        }

        #[test]
        fn zero_capacity_visit_underflows() {
            let mut tracker: RecentTracker<&str> = RecentTracker::new(0);
            assert_eq!(tracker.visit("a"), Err(ListError::EmptyUnderflow));
            assert_eq!(tracker.visit("b"), Err(ListError::EmptyUnderflow));
            assert!(tracker.is_empty());
            assert!(!tracker.contains(&"a"));
            tracker.check_invariants().unwrap();
        }

        #[test]
        fn reset_clears_and_is_idempotent() {
            let mut tracker = RecentTracker::new(3);
            for id in ["a", "b", "c"] {
                tracker.visit(id).unwrap();
            }
            tracker.reset();
            assert!(tracker.is_empty());
            assert_eq!(tracker.capacity(), 3);
            let once = order(&tracker);

            tracker.reset();
            assert_eq!(order(&tracker), once);
            assert!(tracker.is_empty());
            tracker.check_invariants().unwrap();

            assert_eq!(tracker.visit("a"), Ok(Visit::Admitted));
        }

        #[test]
        fn reset_starts_a_new_list() {
            let mut tracker = RecentTracker::new(2);
            tracker.visit(1).unwrap();
            let before = tracker.list().id();
            let stale = tracker.list().first().unwrap();
            tracker.reset();
            assert_ne!(tracker.list().id(), before);
            assert!(!tracker.list().contains(stale));
        }

        #[test]
        fn preallocated_reset_keeps_storage_and_renews_id() {
            use crate::error::PositionFault;

            let mut tracker = RecentTracker::with_preallocation(64);
            for id in 0..64u32 {
                tracker.visit(id).unwrap();
            }
            let id_before = tracker.list().id();
            let capacity_before = tracker.list().capacity();
            let stale = tracker.list().first().unwrap();
            assert!(capacity_before >= 64);

            tracker.reset();
            assert!(tracker.is_empty());
            assert_ne!(tracker.list().id(), id_before);
            assert_eq!(tracker.list().capacity(), capacity_before);
            assert_eq!(
                tracker.list().get(stale),
                Err(ListError::InvalidPosition(PositionFault::ForeignList))
            );
            tracker.check_invariants().unwrap();

            for id in 100..164u32 {
                tracker.visit(id).unwrap();
            }
            assert_eq!(tracker.list().capacity(), capacity_before);
        }

        #[test]
        fn list_view_is_most_recent_first() {
            let mut tracker = CustomerTracker::new(3);
            for name in ["ann", "ben", "cat"] {
                tracker.visit(name.to_string()).unwrap();
            }
            let view = tracker.list();
            assert_eq!(view.len(), 3);
            assert_eq!(view.front().map(String::as_str), Some("cat"));
            assert_eq!(view.back().map(String::as_str), Some("ann"));

            let names: Vec<&str> = (&tracker).into_iter().map(String::as_str).collect();
            assert_eq!(names, ["cat", "ben", "ann"]);
        }

        #[test]
        fn preallocated_tracker_behaves_the_same() {
            let mut tracker = RecentTracker::with_preallocation(2);
            tracker.visit("a").unwrap();
            tracker.visit("b").unwrap();
            tracker.visit("c").unwrap();
            assert_eq!(order(&tracker), vec!["c", "b"]);
            tracker.reset();
            assert!(tracker.is_empty());
        }

        #[test]
        fn trait_surface_matches_inherent_methods() {
            fn drive<P: RecencyPolicy<u8>>(policy: &mut P) -> Vec<Option<usize>> {
                for id in [1, 2, 3, 2] {
                    policy.visit(id).unwrap();
                }
                (1..=4).map(|id| policy.recency_rank(&id)).collect()
            }
            let mut tracker = RecentTracker::new(3);
            assert_eq!(drive(&mut tracker), vec![Some(2), Some(0), Some(1), None]);
            assert_eq!(RecencyPolicy::len(&tracker), 3);
            assert!(!RecencyPolicy::is_empty(&tracker));
            assert_eq!(RecencyPolicy::most_recent(&tracker), Some(&2));
            assert_eq!(RecencyPolicy::least_recent(&tracker), Some(&1));
            RecencyPolicy::reset(&mut tracker);
            assert!(tracker.is_empty());
        }
    }

    // ==============================================
    // METRICS
    // ==============================================
    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn snapshot_counts_visit_outcomes() {
            let mut tracker = RecentTracker::new(2);
            tracker.visit("a").unwrap();
            tracker.visit("b").unwrap();
            tracker.visit("a").unwrap();
            tracker.visit("c").unwrap();
            tracker.recency_rank(&"c");
            tracker.contains(&"zzz");
            tracker.reset();

            let snapshot = tracker.metrics_snapshot();
            assert_eq!(snapshot.visit_calls, 4);
            assert_eq!(snapshot.visit_hits, 1);
            assert_eq!(snapshot.visit_misses, 3);
            assert_eq!(snapshot.admissions, 2);
            assert_eq!(snapshot.evictions, 1);
            assert_eq!(snapshot.resets, 1);
            assert_eq!(snapshot.recency_rank_calls, 1);
            assert_eq!(snapshot.recency_rank_found, 1);
            assert_eq!(snapshot.contains_calls, 1);
            assert_eq!(snapshot.len, 0);
            assert_eq!(snapshot.capacity, 2);
            // a: 0 steps (empty), b: 1, a: 2 (found at rank 1), c: 2
            assert_eq!(snapshot.visit_scan_steps, 5);
            assert_eq!(snapshot.recency_rank_scan_steps, 1);
        }

        #[test]
        fn rank_miss_counts_full_scan() {
            let mut tracker = RecentTracker::new(4);
            for id in [1, 2, 3] {
                tracker.visit(id).unwrap();
            }
            assert_eq!(tracker.recency_rank(&9), None);
            assert_eq!(tracker.recency_rank(&1), Some(2));

            let snapshot = tracker.metrics_snapshot();
            assert_eq!(snapshot.recency_rank_calls, 2);
            assert_eq!(snapshot.recency_rank_found, 1);
            assert_eq!(snapshot.recency_rank_scan_steps, 6);
        }

        #[test]
        fn underflow_is_counted() {
            let mut tracker: RecentTracker<u8> = RecentTracker::new(0);
            let _ = tracker.visit(1);
            let snapshot = tracker.snapshot();
            assert_eq!(snapshot.underflows, 1);
            assert_eq!(snapshot.visit_misses, 1);
        }

        #[test]
        fn reset_metrics_zeroes_counters() {
            let mut tracker = RecentTracker::new(1);
            tracker.visit(1).unwrap();
            tracker.recency_rank(&1);
            tracker.contains(&1);
            tracker.reset_metrics();

            let snapshot = tracker.metrics_snapshot();
            assert_eq!(snapshot.visit_calls, 0);
            assert_eq!(snapshot.visit_scan_steps, 0);
            assert_eq!(snapshot.recency_rank_calls, 0);
            assert_eq!(snapshot.recency_rank_scan_steps, 0);
            assert_eq!(snapshot.contains_calls, 0);
            assert_eq!(snapshot.len, 1);
        }
    }

    // ==============================================
    // PROPERTY TESTS
    // ==============================================
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: len stays within capacity and ids stay distinct
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_bounded_and_distinct(
                capacity in 1usize..8,
                visits in prop::collection::vec(0u8..16, 0..200)
            ) {
                let mut tracker = RecentTracker::new(capacity);
                for id in visits {
                    tracker.visit(id).unwrap();
                    prop_assert!(tracker.len() <= capacity);
                    prop_assert!(tracker.check_invariants().is_ok());
                    prop_assert_eq!(tracker.most_recent(), Some(&id));
                }
            }

            /// Property: the tracker matches a Vec model of linear-scan LRU
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_matches_vec_model(
                capacity in 1usize..6,
                visits in prop::collection::vec(0u8..10, 0..150)
            ) {
                let mut tracker = RecentTracker::new(capacity);
                let mut model: Vec<u8> = Vec::new();

                for id in visits {
                    let outcome = tracker.visit(id).unwrap();
                    if let Some(rank) = model.iter().position(|m| *m == id) {
                        model.remove(rank);
                        prop_assert_eq!(outcome, Visit::Promoted { previous_rank: rank });
                    } else if model.len() == capacity {
                        let evicted = model.pop();
                        prop_assert_eq!(Some(outcome), evicted.map(Visit::Evicted));
                    } else {
                        prop_assert_eq!(outcome, Visit::Admitted);
                    }
                    model.insert(0, id);
                    prop_assert_eq!(tracker.to_vec(), model.clone());
                }
            }
        }
    }
}

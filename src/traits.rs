//! # Recency Tracker Traits
//!
//! [`RecencyPolicy`] is the call surface of a bounded, recency-ordered
//! registry of identifiers. Generic helpers and tests are written against
//! it rather than against a concrete tracker.
//!
//! ```text
//!   ┌─────────────────────────────────────────────┐
//!   │              RecencyPolicy<T>               │
//!   │                                             │
//!   │  visit(&mut, T) → Result<Visit<T>, _>       │
//!   │  reset(&mut)                                │
//!   │  contains(&, &T) → bool                     │
//!   │  recency_rank(&, &T) → Option<usize>        │
//!   │  most_recent(&) / least_recent(&)           │
//!   │  len(&) / is_empty(&) / capacity(&)         │
//!   └──────────────────────┬──────────────────────┘
//!                          │
//!                          ▼
//!              policy::recent::RecentTracker<T>
//! ```
//!
//! ## Visit outcomes
//!
//! | Outcome                | Before               | After                       |
//! |------------------------|----------------------|-----------------------------|
//! | `Admitted`             | id absent, not full  | id at rank 0, len + 1       |
//! | `Promoted { rank }`    | id at `rank`         | id at rank 0, len unchanged |
//! | `Evicted(old)`         | id absent, full      | `old` gone, id at rank 0    |
//!
//! A visit that cannot evict because the registry is both full and empty
//! (capacity 0) fails with [`ListError::EmptyUnderflow`].

use crate::error::ListError;

/// What a successful visit did to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit<T> {
    /// The id was new and there was room for it.
    Admitted,
    /// The id was already tracked at `previous_rank` and moved to the front.
    Promoted { previous_rank: usize },
    /// The id was new, the registry was full, and this least recent id was evicted.
    Evicted(T),
}

impl<T> Visit<T> {
    /// Returns `true` if the visited id was already tracked.
    pub fn is_hit(&self) -> bool {
        matches!(self, Visit::Promoted { .. })
    }

    /// Returns the evicted id, if the visit evicted one.
    pub fn evicted(self) -> Option<T> {
        match self {
            Visit::Evicted(id) => Some(id),
            _ => None,
        }
    }
}

/// Bounded recency-ordered registry of identifiers.
///
/// Rank 0 is the most recently visited id; rank `len() - 1` the least.
///
/// # Example
///
/// ```
/// use recentkit::policy::recent::RecentTracker;
/// use recentkit::traits::{RecencyPolicy, Visit};
///
/// fn visit_all<P: RecencyPolicy<&'static str>>(policy: &mut P, ids: &[&'static str]) {
///     for &id in ids {
///         policy.visit(id).unwrap();
///     }
/// }
///
/// let mut tracker = RecentTracker::new(2);
/// visit_all(&mut tracker, &["a", "b", "a"]);
/// assert_eq!(tracker.recency_rank(&"a"), Some(0));
/// assert_eq!(tracker.visit("c"), Ok(Visit::Evicted("b")));
/// ```
pub trait RecencyPolicy<T> {
    /// Records a visit of `id`, admitting, promoting or evicting as needed.
    fn visit(&mut self, id: T) -> Result<Visit<T>, ListError>;

    /// Forgets every tracked id. Capacity is unchanged.
    fn reset(&mut self);

    /// Returns `true` if `id` is currently tracked.
    fn contains(&self, id: &T) -> bool;

    /// Returns the rank of `id` (0 = most recent), if tracked.
    fn recency_rank(&self, id: &T) -> Option<usize>;

    /// Returns the most recently visited id.
    fn most_recent(&self) -> Option<&T>;

    /// Returns the least recently visited id (next to be evicted).
    fn least_recent(&self) -> Option<&T>;

    /// Returns the number of tracked ids.
    fn len(&self) -> usize;

    /// Returns `true` if no ids are tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of tracked ids.
    fn capacity(&self) -> usize;
}

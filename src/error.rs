//! Error types for the recentkit library.
//!
//! ## Key Components
//!
//! - [`ListError`]: Returned by [`PositionalList`](crate::ds::PositionalList)
//!   operations when a position is not usable or the list is empty. The
//!   tracker forwards these unchanged.
//! - [`PositionFault`]: Why a position was rejected.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (debug-only `check_invariants` methods).
//! - [`ConfigError`]: Returned when tracker configuration parameters are
//!   invalid (e.g. zero capacity under [`ZeroCapacity::Reject`]).
//!
//! [`ZeroCapacity::Reject`]: crate::builder::ZeroCapacity::Reject
//!
//! ## Example Usage
//!
//! ```
//! use recentkit::ds::PositionalList;
//! use recentkit::error::{ListError, PositionFault};
//!
//! let mut list = PositionalList::new();
//! let p = list.add_last("a");
//! assert_eq!(list.remove(p), Ok("a"));
//!
//! // A removed position stays dead.
//! assert_eq!(
//!     list.remove(p),
//!     Err(ListError::InvalidPosition(PositionFault::Stale))
//! );
//!
//! // Removing from an empty list underflows.
//! assert_eq!(list.remove_last(), Err(ListError::EmptyUnderflow));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ListError
// ---------------------------------------------------------------------------

/// Error returned by positional list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The position does not address a live element of this list.
    #[error("invalid position: {0}")]
    InvalidPosition(PositionFault),
    /// A remove-first/remove-last style operation ran on an empty list.
    #[error("cannot remove from an empty list")]
    EmptyUnderflow,
}

/// Reason a position was rejected with [`ListError::InvalidPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PositionFault {
    /// The position was issued by a different list instance.
    #[error("position belongs to another list")]
    ForeignList,
    /// The element the position addressed has been removed.
    #[error("position refers to a removed element")]
    Stale,
    /// The position addresses a boundary sentinel.
    #[error("position addresses a list boundary")]
    Sentinel,
}

impl From<PositionFault> for ListError {
    #[inline]
    fn from(fault: PositionFault) -> Self {
        ListError::InvalidPosition(fault)
    }
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal invariants are violated.
///
/// Produced by debug-only `check_invariants` methods (e.g.
/// [`PositionalList::check_invariants`](crate::ds::PositionalList::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when tracker configuration parameters are invalid.
///
/// Produced by [`TrackerBuilder::build`](crate::builder::TrackerBuilder::build).
///
/// # Example
///
/// ```
/// use recentkit::builder::{TrackerBuilder, ZeroCapacity};
///
/// let err = TrackerBuilder::new(0)
///     .zero_capacity(ZeroCapacity::Reject)
///     .build::<String>()
///     .unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

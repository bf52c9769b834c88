use std::cell::Cell;

/// A metrics-only counter that can be bumped through `&self`.
///
/// Used for read-path counters (`recency_rank`, `contains`) so observing
/// the tracker does not require a mutable borrow. Holding a `Cell` makes
/// the owning tracker `!Sync`, which matches its single-threaded contract.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }

    #[inline]
    pub fn add(&self, n: u64) {
        self.0.set(self.0.get() + n);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.set(0);
    }
}

//! Sentinel-bounded doubly linked list backed by `SlotArena`.
//!
//! Stores list nodes in a generational `SlotArena` and links them by
//! `SlotId`. Every element is addressed by a [`Position`], a `Copy` handle
//! that stays valid until that element is removed and is rejected by every
//! other list instance.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬──────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                   │
//!   ├────────┼──────────────────────────────────────────────┤
//!   │ head   │ { value: None,    prev: tail,   next: id_2 } │
//!   │ tail   │ { value: None,    prev: id_3,   next: head } │
//!   │ id_2   │ { value: Some(A), prev: head,   next: id_3 } │
//!   │ id_3   │ { value: Some(B), prev: id_2,   next: tail } │
//!   └────────┴──────────────────────────────────────────────┘
//!
//!   [head] ◄──► [A] ◄──► [B] ◄──► [tail]
//!     ▲                              │
//!     └──────────────────────────────┘
//! ```
//!
//! The two sentinels are allocated once per list and never handed out, so
//! every insertion has a real predecessor and successor and every removal
//! rewires exactly two neighbors.
//!
//! ## Position validity
//!
//! A [`Position`] carries the [`ListId`] of the list that issued it and the
//! generational [`SlotId`] of its node. An operation rejects it with
//! [`ListError::InvalidPosition`] when
//! - the list id differs ([`PositionFault::ForeignList`]),
//! - the node has been removed, even if the slot was reused since
//!   ([`PositionFault::Stale`]),
//! - it addresses a sentinel ([`PositionFault::Sentinel`]).
//!
//! Validation happens before any link or counter changes.
//!
//! ## Performance
//! - `add_first` / `add_last` / `add_before` / `add_after`: O(1)
//! - `remove` / `remove_first` / `remove_last`: O(1)
//! - `first` / `last` / `before` / `after` / `get` / `set`: O(1)
//! - `iter` / `positions`: O(n)
//!
//! `check_invariants()` is available in debug builds.

use std::collections::TryReserveError;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::{ListError, PositionFault};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of one [`PositionalList`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(u64);

impl ListId {
    fn next() -> Self {
        Self(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque handle to one element of a [`PositionalList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    list: ListId,
    slot: SlotId,
}

impl Position {
    /// Returns the id of the list that issued this position.
    pub fn list_id(self) -> ListId {
        self.list
    }
}

#[derive(Debug)]
struct Node<T> {
    value: Option<T>,
    prev: SlotId,
    next: SlotId,
}

/// Doubly linked positional list whose nodes live in a `SlotArena`.
#[derive(Debug)]
pub struct PositionalList<T> {
    id: ListId,
    arena: SlotArena<Node<T>>,
    head: SlotId,
    tail: SlotId,
    len: usize,
}

impl<T> PositionalList<T> {
    /// Creates an empty list (the two sentinels only).
    pub fn new() -> Self {
        Self::from_arena(SlotArena::new())
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_arena(SlotArena::with_capacity(capacity.saturating_add(2)))
    }

    /// Like [`with_capacity`](Self::with_capacity), but reports allocation
    /// failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        SlotArena::try_with_capacity(capacity.saturating_add(2)).map(Self::from_arena)
    }

    fn from_arena(mut arena: SlotArena<Node<T>>) -> Self {
        // Slot ids are only known after insertion; the head is relinked once the tail exists.
        let head = arena.insert(Node {
            value: None,
            prev: SlotId::DANGLING,
            next: SlotId::DANGLING,
        });
        let tail = arena.insert(Node {
            value: None,
            prev: head,
            next: head,
        });
        if let Some(node) = arena.get_mut(head) {
            node.prev = tail;
            node.next = tail;
        }
        Self {
            id: ListId::next(),
            arena,
            head,
            tail,
            len: 0,
        }
    }

    /// Returns the identity of this list instance.
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns how many elements fit before node storage reallocates.
    pub fn capacity(&self) -> usize {
        self.arena.capacity().saturating_sub(2)
    }

    /// Returns `true` if `position` addresses a live element of this list.
    pub fn contains(&self, position: Position) -> bool {
        self.validate(position).is_ok()
    }

    /// Returns the position of the front element.
    pub fn first(&self) -> Option<Position> {
        self.position(self.next_of(self.head)?)
    }

    /// Returns the position of the back element.
    pub fn last(&self) -> Option<Position> {
        self.position(self.prev_of(self.tail)?)
    }

    /// Returns the position preceding `position`, or `None` if it is first.
    pub fn before(&self, position: Position) -> Result<Option<Position>, ListError> {
        let node = self.validate(position)?;
        Ok(self.position(node.prev))
    }

    /// Returns the position following `position`, or `None` if it is last.
    pub fn after(&self, position: Position) -> Result<Option<Position>, ListError> {
        let node = self.validate(position)?;
        Ok(self.position(node.next))
    }

    /// Returns the element at `position`.
    pub fn get(&self, position: Position) -> Result<&T, ListError> {
        self.validate(position)?
            .value
            .as_ref()
            .ok_or(ListError::InvalidPosition(PositionFault::Sentinel))
    }

    /// Returns a mutable reference to the element at `position`.
    pub fn get_mut(&mut self, position: Position) -> Result<&mut T, ListError> {
        let slot = self.validate(position).map(|_| position.slot)?;
        self.arena
            .get_mut(slot)
            .and_then(|node| node.value.as_mut())
            .ok_or(ListError::InvalidPosition(PositionFault::Stale))
    }

    /// Returns the front element.
    pub fn front(&self) -> Option<&T> {
        self.first().and_then(|p| self.get(p).ok())
    }

    /// Returns the back element.
    pub fn back(&self) -> Option<&T> {
        self.last().and_then(|p| self.get(p).ok())
    }

    /// Inserts `value` at the front and returns its position.
    pub fn add_first(&mut self, value: T) -> Position {
        let successor = self.next_of(self.head).unwrap_or(self.tail);
        self.add_between(value, self.head, successor)
    }

    /// Inserts `value` at the back and returns its position.
    pub fn add_last(&mut self, value: T) -> Position {
        let predecessor = self.prev_of(self.tail).unwrap_or(self.head);
        self.add_between(value, predecessor, self.tail)
    }

    /// Inserts `value` directly before `position`.
    pub fn add_before(&mut self, position: Position, value: T) -> Result<Position, ListError> {
        let predecessor = self.validate(position)?.prev;
        Ok(self.add_between(value, predecessor, position.slot))
    }

    /// Inserts `value` directly after `position`.
    pub fn add_after(&mut self, position: Position, value: T) -> Result<Position, ListError> {
        let successor = self.validate(position)?.next;
        Ok(self.add_between(value, position.slot, successor))
    }

    /// Replaces the element at `position`, returning the previous element.
    pub fn set(&mut self, position: Position, value: T) -> Result<T, ListError> {
        let slot = self.get_mut(position)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Removes the element at `position`; the position is dead afterwards.
    pub fn remove(&mut self, position: Position) -> Result<T, ListError> {
        self.validate(position)?;
        self.remove_between(position.slot)
    }

    /// Removes and returns the front element.
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        let position = self.first().ok_or(ListError::EmptyUnderflow)?;
        self.remove_between(position.slot)
    }

    /// Removes and returns the back element.
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        let position = self.last().ok_or(ListError::EmptyUnderflow)?;
        self.remove_between(position.slot)
    }

    /// Removes every element. All outstanding positions become stale.
    pub fn clear(&mut self) {
        while self.remove_first().is_ok() {}
    }

    /// Empties the list in place under a fresh [`ListId`], keeping its node
    /// storage. Positions issued before the call become foreign.
    pub(crate) fn renew(&mut self) {
        self.clear();
        self.id = ListId::next();
    }

    /// Returns an iterator over elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.next_of(self.head).unwrap_or(self.tail),
            back: self.prev_of(self.tail).unwrap_or(self.head),
            remaining: self.len,
        }
    }

    /// Returns an iterator over positions from front to back.
    pub fn positions(&self) -> Positions<'_, T> {
        Positions {
            list: self,
            current: self.first(),
        }
    }

    /// Returns an iterator of `(Position, &T)` from front to back.
    pub fn entries(&self) -> Entries<'_, T> {
        Entries {
            positions: self.positions(),
        }
    }

    /// Copies the elements into a new `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an approximate memory footprint in bytes.
    pub fn approx_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.arena.approx_bytes()
    }

    /// Validates internal invariants (debug-only).
    #[cfg(debug_assertions)]
    pub fn check_invariants(&self) -> Result<(), crate::error::InvariantError> {
        use crate::error::InvariantError;

        let head = self
            .arena
            .get(self.head)
            .ok_or_else(|| InvariantError::new("head sentinel missing"))?;
        let tail = self
            .arena
            .get(self.tail)
            .ok_or_else(|| InvariantError::new("tail sentinel missing"))?;
        if head.value.is_some() || tail.value.is_some() {
            return Err(InvariantError::new("sentinel holds a value"));
        }
        if head.prev != self.tail || tail.next != self.head {
            return Err(InvariantError::new("sentinels are not linked to each other"));
        }

        let mut count = 0usize;
        let mut prev = self.head;
        let mut current = head.next;
        while current != self.tail {
            let node = self.arena.get(current).ok_or_else(|| {
                InvariantError::new(format!("chain reaches stale slot {:?}", current))
            })?;
            if node.value.is_none() {
                return Err(InvariantError::new(format!(
                    "content node {:?} holds no value",
                    current
                )));
            }
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "node {:?} prev is {:?}, expected {:?}",
                    current, node.prev, prev
                )));
            }
            count += 1;
            if count > self.len {
                return Err(InvariantError::new(format!(
                    "chain longer than len {}",
                    self.len
                )));
            }
            prev = current;
            current = node.next;
        }
        if tail.prev != prev {
            return Err(InvariantError::new(format!(
                "tail prev is {:?}, expected {:?}",
                tail.prev, prev
            )));
        }
        if count != self.len {
            return Err(InvariantError::new(format!(
                "walked {} nodes but len is {}",
                count, self.len
            )));
        }
        if self.arena.len() != self.len + 2 {
            return Err(InvariantError::new(format!(
                "arena holds {} nodes, expected {}",
                self.arena.len(),
                self.len + 2
            )));
        }
        Ok(())
    }

    fn validate(&self, position: Position) -> Result<&Node<T>, ListError> {
        if position.list != self.id {
            return Err(PositionFault::ForeignList.into());
        }
        if position.slot == self.head || position.slot == self.tail {
            return Err(PositionFault::Sentinel.into());
        }
        self.arena
            .get(position.slot)
            .ok_or(ListError::InvalidPosition(PositionFault::Stale))
    }

    fn position(&self, slot: SlotId) -> Option<Position> {
        if slot == self.head || slot == self.tail {
            return None;
        }
        Some(Position {
            list: self.id,
            slot,
        })
    }

    fn next_of(&self, slot: SlotId) -> Option<SlotId> {
        self.arena.get(slot).map(|node| node.next)
    }

    fn prev_of(&self, slot: SlotId) -> Option<SlotId> {
        self.arena.get(slot).map(|node| node.prev)
    }

    fn add_between(&mut self, value: T, predecessor: SlotId, successor: SlotId) -> Position {
        let slot = self.arena.insert(Node {
            value: Some(value),
            prev: predecessor,
            next: successor,
        });
        if let Some(node) = self.arena.get_mut(predecessor) {
            node.next = slot;
        }
        if let Some(node) = self.arena.get_mut(successor) {
            node.prev = slot;
        }
        self.len += 1;
        Position {
            list: self.id,
            slot,
        }
    }

    fn remove_between(&mut self, slot: SlotId) -> Result<T, ListError> {
        let node = self
            .arena
            .remove(slot)
            .ok_or(ListError::InvalidPosition(PositionFault::Stale))?;
        if let Some(prev) = self.arena.get_mut(node.prev) {
            prev.next = node.next;
        }
        if let Some(next) = self.arena.get_mut(node.next) {
            next.prev = node.prev;
        }
        self.len -= 1;
        node.value
            .ok_or(ListError::InvalidPosition(PositionFault::Sentinel))
    }
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over elements, front to back (double-ended).
pub struct Iter<'a, T> {
    list: &'a PositionalList<T>,
    front: SlotId,
    back: SlotId,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.arena.get(self.front)?;
        self.front = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.arena.get(self.back)?;
        self.back = node.prev;
        self.remaining -= 1;
        node.value.as_ref()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// Iterator over positions, front to back.
pub struct Positions<'a, T> {
    list: &'a PositionalList<T>,
    current: Option<Position>,
}

impl<'a, T> Iterator for Positions<'a, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.current?;
        self.current = self.list.after(position).ok().flatten();
        Some(position)
    }
}

/// Iterator over `(Position, &T)` pairs, front to back.
pub struct Entries<'a, T> {
    positions: Positions<'a, T>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (Position, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.positions.next()?;
        let value = self.positions.list.get(position).ok()?;
        Some((position, value))
    }
}

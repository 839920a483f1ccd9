//! A doubly-linked sequence with stable, checked positions.
//!
//! [`LinkedSeq`] is the substrate under [`NavigableSet`] and [`Queue`]: O(1)
//! push at either end, O(1) insertion before or after a known position, O(1)
//! removal of a known position and O(1) stepping in both directions. Nodes
//! live in a [`slab::Slab`], so links are slot indices rather than pointers.
//!
//! A [`Position`] names one node of one sequence. It stays valid until that
//! node is removed; after that every operation taking it returns `None` (or
//! hands the value back), even if the slot has since been reused. Positions
//! taken from another sequence, including a clone, are rejected the same way.
//!
//! ```
//! use ordseq::LinkedSeq;
//!
//! let mut seq = LinkedSeq::new();
//! let a = seq.push_back(1);
//! let c = seq.push_back(3);
//! seq.insert_before(c, 2).unwrap();
//!
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(seq.remove(a), Some(1));
//! assert_eq!(seq.remove(a), None);
//!
//! // stepping off the end wraps around
//! assert_eq!(seq.get(seq.next_circular(c).unwrap()), Some(&2));
//! ```
//!
//! [`NavigableSet`]: crate::NavigableSet
//! [`Queue`]: crate::Queue

use core::fmt;
use core::iter::FusedIterator;
use core::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use slab::Slab;

#[cfg(test)]
mod tests;

static NEXT_OWNER: AtomicUsize = AtomicUsize::new(0);

fn next_owner() -> usize {
    NEXT_OWNER.fetch_add(1, AtomicOrdering::Relaxed)
}

struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
    stamp: u64,
}

/// An opaque handle to one element of a [`LinkedSeq`].
///
/// Obtained from the insertion and navigation methods of the sequence it
/// belongs to. Cheap to copy; holding one does not keep the element alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    key: usize,
    stamp: u64,
    owner: usize,
}

/// A doubly-linked sequence backed by slab storage.
///
/// Tracks head, tail and length, so [`len`](Self::len), [`front`](Self::front)
/// and [`back`](Self::back) are O(1).
///
/// Not synchronized: mutation needs `&mut self`, and sharing one sequence
/// between threads for mutation requires external locking.
pub struct LinkedSeq<T> {
    nodes: Slab<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    owner: usize,
    stamps: u64,
}

impl<T> Default for LinkedSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Slot-level operations, used by the ordered collections while scanning.
// Keys passed here must be live; a stale key is a bug in this crate.
// =============================================================================

impl<T> LinkedSeq<T> {
    #[inline]
    pub(crate) fn front_key(&self) -> Option<usize> {
        self.head
    }

    #[inline]
    pub(crate) fn back_key(&self) -> Option<usize> {
        self.tail
    }

    #[inline]
    pub(crate) fn next_key(&self, key: usize) -> Option<usize> {
        self.nodes[key].next
    }

    #[inline]
    pub(crate) fn prev_key(&self, key: usize) -> Option<usize> {
        self.nodes[key].prev
    }

    #[inline]
    pub(crate) fn value(&self, key: usize) -> &T {
        &self.nodes[key].value
    }

    #[inline]
    pub(crate) fn position(&self, key: usize) -> Position {
        Position {
            key,
            stamp: self.nodes[key].stamp,
            owner: self.owner,
        }
    }

    /// Maps a position back to its slot, if it still names a live node here.
    #[inline]
    pub(crate) fn resolve(&self, pos: Position) -> Option<usize> {
        if pos.owner != self.owner {
            return None;
        }
        match self.nodes.get(pos.key) {
            Some(node) if node.stamp == pos.stamp => Some(pos.key),
            _ => None,
        }
    }

    fn alloc(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let stamp = self.stamps;
        self.stamps = self.stamps.wrapping_add(1);
        self.nodes.insert(Node {
            value,
            prev,
            next,
            stamp,
        })
    }

    pub(crate) fn link_back(&mut self, value: T) -> usize {
        let tail = self.tail;
        let key = self.alloc(value, tail, None);
        match tail {
            Some(tail) => self.nodes[tail].next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        key
    }

    pub(crate) fn link_front(&mut self, value: T) -> usize {
        let head = self.head;
        let key = self.alloc(value, None, head);
        match head {
            Some(head) => self.nodes[head].prev = Some(key),
            None => self.tail = Some(key),
        }
        self.head = Some(key);
        key
    }

    pub(crate) fn link_before(&mut self, before: usize, value: T) -> usize {
        let prev = self.nodes[before].prev;
        let key = self.alloc(value, prev, Some(before));
        self.nodes[before].prev = Some(key);
        match prev {
            Some(prev) => self.nodes[prev].next = Some(key),
            None => self.head = Some(key),
        }
        key
    }

    pub(crate) fn link_after(&mut self, after: usize, value: T) -> usize {
        let next = self.nodes[after].next;
        let key = self.alloc(value, Some(after), next);
        self.nodes[after].next = Some(key);
        match next {
            Some(next) => self.nodes[next].prev = Some(key),
            None => self.tail = Some(key),
        }
        key
    }

    pub(crate) fn unlink(&mut self, key: usize) -> T {
        let node = self.nodes.remove(key);
        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.tail = node.prev,
        }
        node.value
    }

    /// Iterates `len` elements starting at `front` going forward, or at
    /// `back` going backward.
    pub(crate) fn iter_between(
        &self,
        front: Option<usize>,
        back: Option<usize>,
        len: usize,
    ) -> Iter<'_, T> {
        debug_assert!(len <= self.len());
        Iter {
            nodes: &self.nodes,
            front,
            back,
            len,
        }
    }
}

// =============================================================================
// Public API
// =============================================================================

impl<T> LinkedSeq<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
            owner: next_owner(),
            stamps: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|key| self.value(key))
    }

    /// Returns the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|key| self.value(key))
    }

    /// Returns the position of the first element.
    #[inline]
    pub fn front_position(&self) -> Option<Position> {
        self.head.map(|key| self.position(key))
    }

    /// Returns the position of the last element.
    #[inline]
    pub fn back_position(&self) -> Option<Position> {
        self.tail.map(|key| self.position(key))
    }

    /// Returns the position after `pos`.
    ///
    /// `None` if `pos` is the last element or is not a valid position.
    pub fn next(&self, pos: Position) -> Option<Position> {
        let key = self.resolve(pos)?;
        self.next_key(key).map(|next| self.position(next))
    }

    /// Returns the position before `pos`.
    ///
    /// `None` if `pos` is the first element or is not a valid position.
    pub fn prev(&self, pos: Position) -> Option<Position> {
        let key = self.resolve(pos)?;
        self.prev_key(key).map(|prev| self.position(prev))
    }

    /// Returns the position after `pos`, wrapping from the last element to
    /// the first.
    ///
    /// `None` only if `pos` is not a valid position. A single-element
    /// sequence steps onto itself.
    pub fn next_circular(&self, pos: Position) -> Option<Position> {
        let key = self.resolve(pos)?;
        let next = self.next_key(key).or(self.head)?;
        Some(self.position(next))
    }

    /// Returns the position before `pos`, wrapping from the first element to
    /// the last.
    ///
    /// `None` only if `pos` is not a valid position.
    pub fn prev_circular(&self, pos: Position) -> Option<Position> {
        let key = self.resolve(pos)?;
        let prev = self.prev_key(key).or(self.tail)?;
        Some(self.position(prev))
    }

    /// Returns the element at `pos`.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.resolve(pos).map(|key| self.value(key))
    }

    /// Returns `true` if `pos` names a live element of this sequence.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        self.resolve(pos).is_some()
    }

    /// Appends `value` and returns its position.
    pub fn push_back(&mut self, value: T) -> Position {
        let key = self.link_back(value);
        self.position(key)
    }

    /// Prepends `value` and returns its position.
    pub fn push_front(&mut self, value: T) -> Position {
        let key = self.link_front(value);
        self.position(key)
    }

    /// Inserts `value` immediately before `pos`.
    ///
    /// # Errors
    ///
    /// Returns `Err(value)` if `pos` is not a valid position.
    pub fn insert_before(&mut self, pos: Position, value: T) -> Result<Position, T> {
        match self.resolve(pos) {
            Some(before) => {
                let key = self.link_before(before, value);
                Ok(self.position(key))
            }
            None => Err(value),
        }
    }

    /// Inserts `value` immediately after `pos`.
    ///
    /// # Errors
    ///
    /// Returns `Err(value)` if `pos` is not a valid position.
    pub fn insert_after(&mut self, pos: Position, value: T) -> Result<Position, T> {
        match self.resolve(pos) {
            Some(after) => {
                let key = self.link_after(after, value);
                Ok(self.position(key))
            }
            None => Err(value),
        }
    }

    /// Removes the element at `pos`.
    ///
    /// Returns `None` if `pos` is not a valid position.
    pub fn remove(&mut self, pos: Position) -> Option<T> {
        let key = self.resolve(pos)?;
        Some(self.unlink(key))
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let key = self.head?;
        Some(self.unlink(key))
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        let key = self.tail?;
        Some(self.unlink(key))
    }

    /// Removes every element. Positions handed out earlier stay invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_between(self.head, self.tail, self.len())
    }
}

impl<T: Clone> Clone for LinkedSeq<T> {
    /// Clones the elements into a new sequence with its own positions.
    fn clone(&self) -> Self {
        let mut seq = Self::with_capacity(self.len());
        seq.extend(self.iter().cloned());
        seq
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedSeq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedSeq<T> {}

impl<T> Extend<T> for LinkedSeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.link_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<'a, T> IntoIterator for &'a LinkedSeq<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedSeq<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { seq: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`LinkedSeq`].
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: Option<usize>,
    back: Option<usize>,
    len: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next;
        self.len -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.prev;
        self.len -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`LinkedSeq`].
pub struct IntoIter<T> {
    seq: LinkedSeq<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.seq).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.seq.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len(), Some(self.seq.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.seq.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

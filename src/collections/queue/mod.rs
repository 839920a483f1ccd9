//! A queue that is either first-in-first-out or kept in comparator order.
//!
//! The mode is chosen once, by the constructor, and is part of the queue's
//! type through its [`Discipline`]:
//!
//! * [`Queue::fifo`] appends every element at the tail ([`Fifo`]), so
//!   [`poll`](Queue::poll) returns elements in insertion order.
//! * [`Queue::new`] keeps the elements non-decreasing under a comparator
//!   ([`Sorted`]). Duplicates are allowed and equivalent elements leave the
//!   queue in the order they entered it.
//!
//! [`add`](Queue::add) returns a [`Handle`] to the new element, which can be
//! used later to [`remove`](Queue::remove) that element from anywhere in the
//! queue. Handles of polled or removed elements, and handles from other
//! queues, are rejected.
//!
//! ```
//! use ordseq::Queue;
//!
//! let mut queue = Queue::new(|a: &u32, b: &u32| a.cmp(b));
//! queue.add(5);
//! queue.add(1);
//! let dup = queue.add(1);
//! queue.add(3);
//!
//! assert_eq!(queue.peek(), Some(&1));
//! assert_eq!(queue.remove(dup), Some(1));
//! assert_eq!(queue.remove(dup), None);
//!
//! assert_eq!(queue.poll(), Some(1));
//! assert_eq!(queue.poll(), Some(3));
//! assert_eq!(queue.poll(), Some(5));
//! assert_eq!(queue.poll(), None);
//! ```
//!
//! # Thread safety
//!
//! A queue has no internal locking. Mutating a queue that several threads can
//! reach needs external synchronization provided by the caller.

use core::fmt;

use super::linked::{LinkedSeq, Position};
use super::search::SearchBound;
use crate::Comparator;

pub use super::linked::{IntoIter, Iter};


/// A handle to one element of a [`Queue`], returned by [`Queue::add`].
pub type Handle = Position;

/// Where a [`Discipline`] wants a new element to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// At the tail of the queue.
    Back,
    /// Immediately before the element at the given position.
    Before(Position),
    /// Immediately after the element at the given position.
    After(Position),
}

/// Decides where each new element of a [`Queue`] is inserted.
///
/// The discipline sees the queue's sequence read-only and answers with a
/// [`Placement`]. A placement naming a position that is not in the queue
/// appends at the back.
pub trait Discipline<T> {
    /// Picks the place for `value` in `seq`.
    fn place(&self, seq: &LinkedSeq<T>, value: &T) -> Placement;

    /// Returns `true` if the discipline keeps the queue sorted.
    fn is_ordered(&self) -> bool {
        false
    }

    /// Returns `true` if `prev` may directly precede `next`. Checked on the
    /// neighbours of every new element in debug builds.
    fn in_order(&self, prev: &T, next: &T) -> bool {
        let _ = (prev, next);
        true
    }
}

/// First in, first out: every element goes to the tail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fifo;

impl<T> Discipline<T> for Fifo {
    #[inline]
    fn place(&self, _seq: &LinkedSeq<T>, _value: &T) -> Placement {
        Placement::Back
    }
}

/// Ascending comparator order, ties kept in insertion order.
///
/// A new element goes after every element it does not sort before, that is
/// right before the first strictly greater element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sorted<C>(pub C);

impl<T, C: Comparator<T>> Discipline<T> for Sorted<C> {
    fn place(&self, seq: &LinkedSeq<T>, value: &T) -> Placement {
        let (greater, _) =
            seq.find_lower_bound(|e| self.0.compare(e, value), SearchBound::Excluded);
        match greater {
            Some(key) => Placement::Before(seq.position(key)),
            None => Placement::Back,
        }
    }

    fn is_ordered(&self) -> bool {
        true
    }

    fn in_order(&self, prev: &T, next: &T) -> bool {
        self.0.compare(prev, next).is_le()
    }
}

/// A queue over a linked sequence, ordered by its [`Discipline`].
#[derive(Clone)]
pub struct Queue<T, D = Fifo> {
    seq: LinkedSeq<T>,
    discipline: D,
}

impl<T> Queue<T, Fifo> {
    /// Creates an empty first-in-first-out queue.
    ///
    /// ```
    /// use ordseq::Queue;
    ///
    /// let mut queue = Queue::fifo();
    /// queue.add(3);
    /// queue.add(1);
    /// assert_eq!(queue.poll(), Some(3));
    /// assert_eq!(queue.poll(), Some(1));
    /// ```
    pub fn fifo() -> Self {
        Self::with_discipline(Fifo)
    }
}

impl<T, C: Comparator<T>> Queue<T, Sorted<C>> {
    /// Creates an empty queue kept in ascending order by `cmp`.
    pub fn new(cmp: C) -> Self {
        Self::with_discipline(Sorted(cmp))
    }
}

impl<T, D> Queue<T, D> {
    /// Creates an empty queue with a custom discipline.
    pub fn with_discipline(discipline: D) -> Self {
        Self {
            seq: LinkedSeq::new(),
            discipline,
        }
    }

    /// Returns a reference to the queue's discipline.
    pub fn discipline(&self) -> &D {
        &self.discipline
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Returns the head of the queue without removing it, or `None` if the
    /// queue is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.seq.front()
    }

    /// Removes and returns the head of the queue, or `None` if the queue is
    /// empty.
    #[inline]
    pub fn poll(&mut self) -> Option<T> {
        self.seq.pop_front()
    }

    /// Removes the element `handle` refers to.
    ///
    /// Returns `None` if the element has already left the queue or the handle
    /// came from a different queue.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        self.seq.remove(handle)
    }

    /// Returns the element `handle` refers to, if it is still queued.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.seq.get(handle)
    }

    /// Returns `true` if the element `handle` refers to is still queued.
    pub fn contains(&self, handle: Handle) -> bool {
        self.seq.contains(handle)
    }

    /// Removes all elements. Outstanding handles become invalid.
    pub fn clear(&mut self) {
        self.seq.clear();
    }

    /// Gets an iterator from head to tail, the order [`poll`](Self::poll)
    /// would return the elements in.
    pub fn iter(&self) -> Iter<'_, T> {
        self.seq.iter()
    }
}

impl<T, D: Discipline<T>> Queue<T, D> {
    /// Inserts `value` where the discipline places it and returns a handle to
    /// it.
    pub fn add(&mut self, value: T) -> Handle {
        let key = match self.discipline.place(&self.seq, &value) {
            Placement::Back => self.seq.link_back(value),
            Placement::Before(pos) => match self.seq.resolve(pos) {
                Some(before) => self.seq.link_before(before, value),
                None => self.seq.link_back(value),
            },
            Placement::After(pos) => match self.seq.resolve(pos) {
                Some(after) => self.seq.link_after(after, value),
                None => self.seq.link_back(value),
            },
        };
        self.debug_check_order(key);
        self.seq.position(key)
    }

    /// Returns `true` if the queue is kept sorted, `false` for FIFO.
    pub fn is_ordered(&self) -> bool {
        self.discipline.is_ordered()
    }

    fn debug_check_order(&self, key: usize) {
        if cfg!(debug_assertions) {
            let value = self.seq.value(key);
            if let Some(prev) = self.seq.prev_key(key) {
                debug_assert!(self.discipline.in_order(self.seq.value(prev), value));
            }
            if let Some(next) = self.seq.next_key(key) {
                debug_assert!(self.discipline.in_order(value, self.seq.value(next)));
            }
        }
    }
}

impl<T, D: Default> Default for Queue<T, D> {
    fn default() -> Self {
        Self::with_discipline(D::default())
    }
}

impl<T: fmt::Debug, D> fmt::Debug for Queue<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, D: Discipline<T>> Extend<T> for Queue<T, D> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T, D> IntoIterator for &'a Queue<T, D> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, D> IntoIterator for Queue<T, D> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator that polls every element, head first.
    fn into_iter(self) -> IntoIter<T> {
        self.seq.into_iter()
    }
}

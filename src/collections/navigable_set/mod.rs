//! An ordered set with directional queries, kept sorted by a comparator.
//!
//! [`NavigableSet`] stores its elements in a [`LinkedSeq`] in strictly
//! ascending order and holds at most one element per equivalence class of its
//! comparator. Besides membership it answers navigation queries relative to a
//! probe value: [`floor`], [`ceiling`], [`lower`], [`higher`], and the
//! sub-range views [`tail_set`] and [`head_set`].
//!
//! Every query and mutation is a linear scan from one end that stops at the
//! first decisive comparison, so operations are O(n). [`len`], [`first`] and
//! [`last`] are O(1).
//!
//! # Thread safety
//!
//! A set has no internal locking. Shared (`&`) access from several threads is
//! fine when `T` and `C` are `Sync`; mutating a set that other threads can
//! reach needs external synchronization, such as a `Mutex`, provided by the
//! caller.
//!
//! [`floor`]: NavigableSet::floor
//! [`ceiling`]: NavigableSet::ceiling
//! [`lower`]: NavigableSet::lower
//! [`higher`]: NavigableSet::higher
//! [`tail_set`]: NavigableSet::tail_set
//! [`head_set`]: NavigableSet::head_set
//! [`len`]: NavigableSet::len
//! [`first`]: NavigableSet::first
//! [`last`]: NavigableSet::last

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter::Rev;

use super::dedup_sorted_iter::DedupSortedIter;
use super::linked::LinkedSeq;
use super::search::{SearchBound, SearchResult::*};
use crate::{Comparator, Error, Natural};

pub use super::linked::{IntoIter, Iter};


/// Descending iterator over a [`NavigableSet`] or a part of it.
pub type Descending<'a, T> = Rev<Iter<'a, T>>;

/// An ordered set based on a linked sequence and a comparator function.
///
/// The comparator is fixed when the set is built. It must impose a total
/// order on `T`; see [`Comparator`] for the contract. Elements that compare
/// `Equal` count as the same element, so the first one added stays and later
/// ones are refused.
///
/// # Examples
///
/// ```
/// use ordseq::NavigableSet;
///
/// let mut set = NavigableSet::new(|a: &i32, b: &i32| a.cmp(b));
/// assert!(set.add(5));
/// assert!(set.add(1));
/// assert!(set.add(3));
/// assert!(!set.add(3));
///
/// assert!(set.iter().eq(&[1, 3, 5]));
/// assert_eq!(set.higher(&3), Some(&5));
/// assert_eq!(set.floor(&4), Some(&3));
/// assert_eq!(set.ceiling(&4), Some(&5));
///
/// assert!(set.remove(&3));
/// assert!(!set.contains(&3));
/// assert!(set.iter().eq(&[1, 5]));
/// ```
#[derive(Clone)]
pub struct NavigableSet<T, C> {
    seq: LinkedSeq<T>,
    cmp: C,
}

impl<T, C> NavigableSet<T, C> {
    /// Creates an empty set ordered by `cmp`.
    pub fn new(cmp: C) -> Self {
        Self {
            seq: LinkedSeq::new(),
            cmp,
        }
    }

    /// Creates an empty set from a comparator that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingComparator`] if `cmp` is `None`.
    ///
    /// ```
    /// use ordseq::{Error, Natural, NavigableSet};
    ///
    /// let set = NavigableSet::<u8, Natural>::try_new(None);
    /// assert_eq!(set.err(), Some(Error::MissingComparator));
    ///
    /// let set = NavigableSet::<u8, Natural>::try_new(Some(Natural)).unwrap();
    /// assert!(set.is_empty());
    /// ```
    pub fn try_new(cmp: Option<C>) -> Result<Self, Error> {
        cmp.map(Self::new).ok_or(Error::MissingComparator)
    }

    /// Returns a reference to the set's comparator.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.seq.clear();
    }

    /// Returns the first (lowest) element, or `None` if the set is empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.seq.front()
    }

    /// Returns the last (highest) element, or `None` if the set is empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.seq.back()
    }

    /// Removes and returns the first element.
    pub fn pop_first(&mut self) -> Option<T> {
        self.seq.pop_front()
    }

    /// Removes and returns the last element.
    pub fn pop_last(&mut self) -> Option<T> {
        self.seq.pop_back()
    }

    /// Gets an iterator that visits the elements in ascending order.
    ///
    /// The iterator is double-ended and can be cloned to restart it.
    pub fn iter(&self) -> Iter<'_, T> {
        self.seq.iter()
    }

    /// Gets an iterator that visits the elements in descending order.
    ///
    /// ```
    /// use ordseq::{Natural, NavigableSet};
    ///
    /// let set: NavigableSet<_, Natural> = [2, 3, 1].into_iter().collect();
    /// assert!(set.descending_set().eq(&[3, 2, 1]));
    /// ```
    pub fn descending_set(&self) -> Descending<'_, T> {
        self.seq.iter().rev()
    }
}

impl<T, C: Comparator<T>> NavigableSet<T, C> {
    /// Builds a set from an iterator in one pass.
    ///
    /// The result is the same as adding the elements one by one, in iteration
    /// order: of several equivalent elements the first one is kept. Costs
    /// O(n log n) instead of O(n²).
    pub fn from_iter_with<I>(iter: I, cmp: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = iter.into_iter().collect();
        // stable, so the first of each equivalence class leads its run
        values.sort_by(|a, b| cmp.compare(a, b));

        let mut seq = LinkedSeq::with_capacity(values.len());
        seq.extend(DedupSortedIter::new(values.into_iter(), &cmp));
        Self { seq, cmp }
    }

    /// Adds `value` to the set if no equivalent element is present.
    ///
    /// Returns `true` if the value was inserted. If the set already holds an
    /// element comparing `Equal`, the set is left unchanged and `false` is
    /// returned.
    pub fn add(&mut self, value: T) -> bool {
        let key = match self.seq.search_forward(|e| self.cmp.compare(e, &value)) {
            Found(_) => return false,
            Edge(Some(greater)) => self.seq.link_before(greater, value),
            Edge(None) => self.seq.link_back(value),
        };
        self.debug_check_order(key);
        true
    }

    /// Removes the element equivalent to `value`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the element equivalent to `value`.
    pub fn take(&mut self, value: &T) -> Option<T> {
        match self.seq.search_forward(|e| self.cmp.compare(e, value)) {
            Found(key) => Some(self.seq.unlink(key)),
            Edge(_) => None,
        }
    }

    /// Returns `true` if the set holds an element equivalent to `value`.
    pub fn contains(&self, value: &T) -> bool {
        matches!(
            self.seq.search_forward(|e| self.cmp.compare(e, value)),
            Found(_)
        )
    }

    /// Returns the stored element equivalent to `value`.
    pub fn get(&self, value: &T) -> Option<&T> {
        match self.seq.search_forward(|e| self.cmp.compare(e, value)) {
            Found(key) => Some(self.seq.value(key)),
            Edge(_) => None,
        }
    }

    /// Returns the least element strictly greater than `value`.
    ///
    /// `None` if there is no such element, including when `value` matches the
    /// last element.
    pub fn higher(&self, value: &T) -> Option<&T> {
        let key = match self.seq.search_forward(|e| self.cmp.compare(e, value)) {
            Found(key) => self.seq.next_key(key),
            Edge(greater) => greater,
        };
        key.map(|key| self.seq.value(key))
    }

    /// Returns the least element greater than or equal to `value`.
    pub fn ceiling(&self, value: &T) -> Option<&T> {
        match self.seq.search_forward(|e| self.cmp.compare(e, value)) {
            Found(key) | Edge(Some(key)) => Some(self.seq.value(key)),
            Edge(None) => None,
        }
    }

    /// Returns the greatest element strictly less than `value`.
    ///
    /// `None` if there is no such element, including when `value` matches the
    /// first element.
    pub fn lower(&self, value: &T) -> Option<&T> {
        let key = match self.seq.search_backward(|e| self.cmp.compare(e, value)) {
            Found(key) => self.seq.prev_key(key),
            Edge(lesser) => lesser,
        };
        key.map(|key| self.seq.value(key))
    }

    /// Returns the greatest element less than or equal to `value`.
    pub fn floor(&self, value: &T) -> Option<&T> {
        match self.seq.search_backward(|e| self.cmp.compare(e, value)) {
            Found(key) | Edge(Some(key)) => Some(self.seq.value(key)),
            Edge(None) => None,
        }
    }

    /// Gets an ascending iterator over the elements greater than `from`, or
    /// greater than or equal to it if `inclusive` is true.
    ///
    /// ```
    /// use ordseq::{Natural, NavigableSet};
    ///
    /// let set: NavigableSet<_, Natural> = (1..=5).collect();
    /// assert!(set.tail_set(&3, true).eq(&[3, 4, 5]));
    /// assert!(set.tail_set(&3, false).eq(&[4, 5]));
    /// ```
    pub fn tail_set(&self, from: &T, inclusive: bool) -> Iter<'_, T> {
        let (start, len) = self.seq.find_lower_bound(
            |e| self.cmp.compare(e, from),
            SearchBound::from_inclusive(inclusive),
        );
        self.seq.iter_between(start, self.seq.back_key(), len)
    }

    /// Gets a **descending** iterator over the elements less than `from`, or
    /// less than or equal to it if `inclusive` is true.
    ///
    /// The elements come out highest first, scanning back from the end of the
    /// set. Reverse the iterator for ascending order.
    ///
    /// ```
    /// use ordseq::{Natural, NavigableSet};
    ///
    /// let set: NavigableSet<_, Natural> = (1..=5).collect();
    /// assert!(set.head_set(&3, true).eq(&[3, 2, 1]));
    /// assert!(set.head_set(&3, false).rev().eq(&[1, 2]));
    /// ```
    pub fn head_set(&self, from: &T, inclusive: bool) -> Descending<'_, T> {
        let (start, len) = self.seq.find_upper_bound(
            |e| self.cmp.compare(e, from),
            SearchBound::from_inclusive(inclusive),
        );
        self.seq.iter_between(self.seq.front_key(), start, len).rev()
    }

    fn debug_check_order(&self, key: usize) {
        if cfg!(debug_assertions) {
            let value = self.seq.value(key);
            if let Some(prev) = self.seq.prev_key(key) {
                debug_assert_eq!(
                    self.cmp.compare(self.seq.value(prev), value),
                    Ordering::Less,
                    "comparator is not a total order"
                );
            }
            if let Some(next) = self.seq.next_key(key) {
                debug_assert_eq!(
                    self.cmp.compare(self.seq.value(next), value),
                    Ordering::Greater,
                    "comparator is not a total order"
                );
            }
        }
    }
}

impl<T, C: Default> Default for NavigableSet<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for NavigableSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C: Comparator<T>> Extend<T> for NavigableSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for NavigableSet<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, Natural)
    }
}

impl<'a, T, C> IntoIterator for &'a NavigableSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> IntoIterator for NavigableSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator that moves the elements out in ascending order.
    fn into_iter(self) -> IntoIter<T> {
        self.seq.into_iter()
    }
}

use core::cmp::Ordering;

use super::linked::LinkedSeq;

use SearchBound::*;
use SearchResult::*;

pub(crate) enum SearchBound {
    /// An inclusive bound to look for, just like `Bound::Included(T)`.
    Included,
    /// An exclusive bound to look for, just like `Bound::Excluded(T)`.
    Excluded,
}

impl SearchBound {
    pub(crate) fn from_inclusive(inclusive: bool) -> Self {
        if inclusive {
            Included
        } else {
            Excluded
        }
    }
}

pub(crate) enum SearchResult {
    /// The slot of the first element comparing equal to the probe.
    Found(usize),
    /// The slot where the scan stopped without finding an equal element, or
    /// `None` if it ran off the end of the sequence.
    Edge(Option<usize>),
}

// Every probe closure answers `compare(element, probe)` for the element it is
// handed, so `Less` means "element sorts before the probe".
impl<T> LinkedSeq<T> {
    /// Scans front to back. Returns a `Found` with the first equal element,
    /// otherwise an `Edge` with the first greater element, which is where the
    /// probe would be inserted.
    ///
    /// The result is meaningful only if the sequence is ascending under the
    /// order the probe uses.
    pub(crate) fn search_forward<C>(&self, mut comp: C) -> SearchResult
    where
        C: FnMut(&T) -> Ordering,
    {
        let mut cur = self.front_key();
        while let Some(key) = cur {
            match comp(self.value(key)) {
                Ordering::Less => {}
                Ordering::Equal => return Found(key),
                Ordering::Greater => return Edge(Some(key)),
            }
            cur = self.next_key(key);
        }
        Edge(None)
    }

    /// Mirror image of `search_forward`: scans back to front and stops at the
    /// first equal element, otherwise at the first lesser one.
    pub(crate) fn search_backward<C>(&self, mut comp: C) -> SearchResult
    where
        C: FnMut(&T) -> Ordering,
    {
        let mut cur = self.back_key();
        while let Some(key) = cur {
            match comp(self.value(key)) {
                Ordering::Greater => {}
                Ordering::Equal => return Found(key),
                Ordering::Less => return Edge(Some(key)),
            }
            cur = self.prev_key(key);
        }
        Edge(None)
    }

    /// Finds the first slot, scanning forward, that lies above the lower
    /// bound of a range. Also returns how many elements lie at or after it.
    pub(crate) fn find_lower_bound<C>(
        &self,
        mut comp: C,
        bound: SearchBound,
    ) -> (Option<usize>, usize)
    where
        C: FnMut(&T) -> Ordering,
    {
        let (key, skipped) = match bound {
            Included => self.skip_while(true, |e| comp(e) == Ordering::Less),
            Excluded => self.skip_while(true, |e| comp(e) != Ordering::Greater),
        };
        (key, self.len() - skipped)
    }

    /// Mirror image of `find_lower_bound` for the upper bound: scans backward
    /// and returns the last slot below the bound, and how many elements lie
    /// at or before it.
    pub(crate) fn find_upper_bound<C>(
        &self,
        mut comp: C,
        bound: SearchBound,
    ) -> (Option<usize>, usize)
    where
        C: FnMut(&T) -> Ordering,
    {
        let (key, skipped) = match bound {
            Included => self.skip_while(false, |e| comp(e) == Ordering::Greater),
            Excluded => self.skip_while(false, |e| comp(e) != Ordering::Less),
        };
        (key, self.len() - skipped)
    }

    fn skip_while<P>(&self, forward: bool, mut skip: P) -> (Option<usize>, usize)
    where
        P: FnMut(&T) -> bool,
    {
        let mut skipped = 0;
        let mut cur = if forward { self.front_key() } else { self.back_key() };
        while let Some(key) = cur {
            if !skip(self.value(key)) {
                break;
            }
            skipped += 1;
            cur = if forward { self.next_key(key) } else { self.prev_key(key) };
        }
        (cur, skipped)
    }
}

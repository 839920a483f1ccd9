use core::iter::Peekable;

use crate::Comparator;

/// A iterator for deduping the elements of a sorted iterator.
/// When encountering a run of equivalent elements, only the first one is
/// yielded, which is the one repeated insertion would have kept.
///
/// Used by [`NavigableSet::from_iter_with`][1].
///
/// [1]: crate::NavigableSet::from_iter_with
pub struct DedupSortedIter<'c, T, I, C>
where
    I: Iterator<Item = T>,
{
    iter: Peekable<I>,
    cmp: &'c C,
}

impl<'c, T, I, C> DedupSortedIter<'c, T, I, C>
where
    I: Iterator<Item = T>,
{
    pub fn new(iter: I, cmp: &'c C) -> Self {
        Self {
            iter: iter.peekable(),
            cmp,
        }
    }
}

impl<T, I, C> Iterator for DedupSortedIter<'_, T, I, C>
where
    I: Iterator<Item = T>,
    C: Comparator<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let first = self.iter.next()?;
        while self
            .iter
            .next_if(|next| self.cmp.equivalent(&first, next))
            .is_some()
        {}
        Some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Natural;
    use alloc::vec::Vec;

    #[test]
    fn keeps_first_of_each_run() {
        let by_tens = |a: &(u32, char), b: &(u32, char)| (a.0 / 10).cmp(&(b.0 / 10));
        let input = [(1, 'a'), (5, 'b'), (12, 'c'), (30, 'd'), (31, 'e'), (39, 'f')];
        let out: Vec<_> = DedupSortedIter::new(input.into_iter(), &by_tens).collect();
        assert_eq!(out, [(1, 'a'), (12, 'c'), (30, 'd')]);
    }

    #[test]
    fn empty_and_single() {
        let none: Vec<u8> = DedupSortedIter::new(core::iter::empty(), &Natural).collect();
        assert!(none.is_empty());
        let one: Vec<_> = DedupSortedIter::new(core::iter::once(7), &Natural).collect();
        assert_eq!(one, [7]);
    }
}

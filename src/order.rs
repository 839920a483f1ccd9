//! Comparator functions defining the total order of a collection.
//!
//! Every ordered collection in this crate is driven by a [`Comparator`]: a
//! three-way comparison that is called as `compare(existing, probe)` while
//! the collection scans its sequence. Any `Fn(&T, &T) -> Ordering` closure is a
//! comparator, so most callers never name this trait.
//!
//! # Contract
//!
//! A comparator must impose a total order: it has to be antisymmetric,
//! transitive, and give the same answer every time it is asked about the same
//! two logical values. It must not have side effects. Breaking the contract
//! does not cause undefined behavior, but the ascending, dedup, and stability
//! guarantees of the collections no longer hold.
//!
//! ```
//! use ordseq::{Comparator, Natural, Reverse};
//! use core::cmp::Ordering;
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
//!
//! assert_eq!(Natural.compare(&2, &1), Ordering::Greater);
//! assert_eq!(Reverse(Natural).compare(&2, &1), Ordering::Less);
//! ```

use core::cmp::Ordering;

/// A three-way comparison imposing a total order over `T`.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` and `b` fall in the same equivalence class.
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The order given by `T: Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the order of another comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_comparator() {
        let cmp = |a: &i32, b: &i32| a.cmp(b);
        assert_eq!(cmp.compare(&1, &2), Ordering::Less);
        assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
        assert!(cmp.equivalent(&3, &3));
    }

    #[test]
    fn fn_item_is_a_comparator() {
        fn by_abs(a: &i32, b: &i32) -> Ordering {
            a.abs().cmp(&b.abs())
        }
        assert_eq!(by_abs.compare(&-3, &2), Ordering::Greater);
        assert!(by_abs.equivalent(&-2, &2));
    }

    #[test]
    fn reverse_flips() {
        assert_eq!(Reverse(Natural).compare(&1, &2), Ordering::Greater);
        assert_eq!(Reverse(Reverse(Natural)).compare(&1, &2), Ordering::Less);
        assert_eq!(Reverse(Natural).compare("a", "a"), Ordering::Equal);
    }
}

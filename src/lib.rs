#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

extern crate alloc;

pub mod error;
pub mod order;

mod collections;
pub use collections::{linked, navigable_set, queue};

#[cfg(test)]
mod testing;

#[doc(no_inline)]
pub use error::Error;

#[doc(no_inline)]
pub use order::{Comparator, Natural, Reverse};

#[doc(no_inline)]
pub use linked::{LinkedSeq, Position};

#[doc(no_inline)]
pub use navigable_set::NavigableSet;

#[doc(no_inline)]
pub use queue::{Discipline, Fifo, Handle, Placement, Queue, Sorted};

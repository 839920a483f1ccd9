//! Error type for collection construction.
//!
//! Lookups and removals that find nothing are not errors: they return `None`
//! or `false`. The only failure that is reported as an [`Error`] is a
//! configuration mistake that leaves a collection unusable.

use core::fmt::{Display, Formatter, Result};

use cfg_if::cfg_if;

/// Error type for collection construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A collection that orders its elements was built without a comparator.
    MissingComparator,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Error::MissingComparator => {
                write!(f, "a comparator is required to build an ordered collection")
            }
        }
    }
}

cfg_if! {
    if #[cfg(feature = "std")] {
        impl std::error::Error for Error {}
    } else {
        #[rustversion::since(1.81)]
        impl core::error::Error for Error {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_problem() {
        let msg = Error::MissingComparator.to_string();
        assert!(msg.contains("comparator"));
    }
}

//! Shared helpers for the unit tests.

use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

/// A deterministic generator, so a failing randomized test fails every run.
pub(crate) fn rng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(0x6f72_6473_6571)
}

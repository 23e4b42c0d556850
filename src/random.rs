//! Random number generator construction.
//!
//! Every randomized operator in this crate takes `&mut R where R: Rng`, so
//! callers decide where entropy comes from. These helpers build the
//! generators used by [`ChromosomeConfig`](crate::chromosome::ChromosomeConfig)
//! and by the tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a seed.
///
/// The same seed always yields the same sequence of draws, which makes
/// population generation, mutation and uniform crossover reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from operating system entropy.
pub fn create_os_rng() -> StdRng {
    StdRng::from_os_rng()
}

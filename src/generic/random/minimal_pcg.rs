//! A simple pseudorandom number generator.
//!
//! Specifically, the minimal C PCG32 generator from <https://www.pcg-random.org/>, carried over to the [rand_core] traits.
//!
//! Randomness plays a small part in a solve: the generator feeds the optional tie-break between equally short candidate clauses, and nothing else.
//! PCG(32) suits that role as it is simple, fast, and has some nice supporting documentation.
//! A [context](crate::context) fixes its source of rng at construction, seeded with a constant, so two runs over the same input examine the same clauses in the same order; revising or parameterising the context is all that's needed for a different source.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// The multiplier of the PCG reference implementation.
const MULTIPLIER: u64 = 6364136223846793005;

/// The (odd) increment of the PCG reference implementation.
///
/// Any odd increment gives a full-period generator; there is no reason to prefer another.
const INCREMENT: u64 = 1442695040888963407;

/// State and increment.
///
/// The derived [Default] leaves both at zero, a degenerate fixed point of the state transition.
/// Obtain a generator through [from_seed](SeedableRng::from_seed) instead.
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

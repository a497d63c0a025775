use rand::SeedableRng;

use crate::{config::Config, generic::random::MinimalPCG32};

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// The source of randomness is seeded with a fixed value, so two runs over the same input behave identically.
    pub fn from_config(config: Config) -> Self {
        Self::with_rng(config, MinimalPCG32::from_seed(0_u64.to_le_bytes()))
    }
}

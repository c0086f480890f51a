//! Configuration management for robustness summarization

use crate::robustness::sampler::{PairSampling, DEFAULT_PAIR_SEED};
use std::num::NonZeroUsize;

/// Knobs for summarizing noise levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Cap on run pairs compared per noise level (None = every pair)
    pub max_pairs: Option<NonZeroUsize>,

    /// Seed for pair sampling when a cap applies
    pub seed: u64,

    /// Summarize noise levels on the rayon thread pool
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_pairs: None,
            seed: DEFAULT_PAIR_SEED,
            parallel: true,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(max_pairs: Option<NonZeroUsize>, seed: u64, parallel: bool) -> Self {
        Self {
            max_pairs,
            seed,
            parallel,
        }
    }

    /// Pair sampling strategy implied by `max_pairs` and `seed`
    pub fn sampling(&self) -> PairSampling {
        match self.max_pairs {
            Some(max_pairs) => PairSampling::capped(max_pairs, self.seed),
            None => PairSampling::All,
        }
    }
}

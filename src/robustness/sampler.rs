//! Mean pairwise Variation of Information across runs

use crate::error::RobustnessError;
use crate::partition::distance::variation_of_information;
use itertools::Itertools;
use ndarray::ArrayView2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// Seed used for pair sampling unless the caller picks another
pub const DEFAULT_PAIR_SEED: u64 = 42;

/// Which run pairs enter the mean VI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairSampling {
    /// Every unordered pair of runs
    #[default]
    All,

    /// At most `max_pairs` pairs, drawn without replacement from a
    /// ChaCha8 stream seeded with `seed`
    Capped { max_pairs: NonZeroUsize, seed: u64 },
}

impl PairSampling {
    pub fn capped(max_pairs: NonZeroUsize, seed: u64) -> Self {
        Self::Capped { max_pairs, seed }
    }
}

/// Select the run-index pairs `(i, j)` with `i < j` to compare.
///
/// With a cap smaller than C(R,2) exactly `max_pairs` distinct pairs are
/// drawn; the result is returned in enumeration order and depends only on
/// `run_count`, the cap and the seed.
pub fn select_pairs(run_count: usize, sampling: PairSampling) -> Vec<(usize, usize)> {
    let pairs: Vec<(usize, usize)> = (0..run_count).tuple_combinations().collect();

    match sampling {
        PairSampling::Capped { max_pairs, seed } if pairs.len() > max_pairs.get() => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut picked = rand::seq::index::sample(&mut rng, pairs.len(), max_pairs.get()).into_vec();
            picked.sort_unstable();

            log::debug!(
                "Sampled {} of {} run pairs (seed {})",
                picked.len(),
                pairs.len(),
                seed
            );
            picked.into_iter().map(|k| pairs[k]).collect()
        }
        _ => pairs,
    }
}

/// Mean VI over the selected pairs of rows in an R×N label stack.
///
/// Returns 0 when fewer than two runs exist.
pub fn mean_pairwise_vi<L: Eq + Hash>(
    partitions: ArrayView2<'_, L>,
    sampling: PairSampling,
) -> Result<f64, RobustnessError> {
    let pairs = select_pairs(partitions.nrows(), sampling);
    if pairs.is_empty() {
        return Ok(0.0);
    }

    let distances = pairs
        .iter()
        .map(|&(i, j)| variation_of_information(partitions.row(i), partitions.row(j)))
        .collect::<Result<Vec<f64>, _>>()?;

    Ok(distances.iter().sum::<f64>() / distances.len() as f64)
}

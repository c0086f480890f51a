//! Consensus (co-assignment) matrix across repeated partitions

pub mod entropy;

pub use entropy::Normalization;

use ndarray::{Array2, ArrayView1, ArrayView2};
use rayon::prelude::*;

/// Above this many label comparisons (R·N²) runs are folded in parallel
const PARALLEL_WORK_THRESHOLD: usize = 1_000_000;

/// N×N matrix of co-assignment frequencies.
///
/// `C[i][j]` is the fraction of runs in which nodes i and j share a label.
/// The matrix is symmetric with a unit diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsensusMatrix {
    values: Array2<f64>,
    runs: usize,
}

impl ConsensusMatrix {
    /// Build the matrix from an R×N label stack (one row per run).
    ///
    /// Returns `None` when there are no runs to average over.
    pub fn from_partitions<L>(partitions: ArrayView2<'_, L>) -> Option<Self>
    where
        L: PartialEq + Sync,
    {
        let (runs, nodes) = partitions.dim();
        if runs == 0 {
            return None;
        }

        let counts = if runs.saturating_mul(nodes).saturating_mul(nodes) < PARALLEL_WORK_THRESHOLD {
            co_assignment_counts_sequential(partitions)
        } else {
            co_assignment_counts_parallel(partitions)
        };

        let values = counts.mapv(|c| c as f64 / runs as f64);
        log::debug!("Built {}x{} consensus matrix from {} runs", nodes, nodes, runs);

        Some(Self { values, runs })
    }

    /// Wrap an existing matrix of co-assignment probabilities.
    ///
    /// Returns `None` unless the matrix is square and symmetric with a unit
    /// diagonal and every entry in [0, 1].
    pub fn from_values(values: Array2<f64>, runs: usize) -> Option<Self> {
        let (rows, cols) = values.dim();
        if rows != cols {
            return None;
        }

        for ((i, j), &v) in values.indexed_iter() {
            if !(0.0..=1.0).contains(&v) || v != values[[j, i]] {
                return None;
            }
            if i == j && v != 1.0 {
                return None;
            }
        }

        Some(Self { values, runs })
    }

    /// Number of nodes N
    pub fn node_count(&self) -> usize {
        self.values.nrows()
    }

    /// Number of runs the matrix averages over
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Co-assignment probability of nodes i and j
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[[i, j]]
    }

    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// Mean binary entropy per distinct unordered node pair
    pub fn entropy(&self) -> f64 {
        entropy::consensus_entropy(self, Normalization::UnorderedPairs)
    }
}

/// Add one run's same-label indicator matrix into `acc`
fn accumulate_run<L: PartialEq>(mut acc: Array2<u32>, labels: ArrayView1<'_, L>) -> Array2<u32> {
    let n = labels.len();
    for i in 0..n {
        acc[[i, i]] += 1;
        for j in (i + 1)..n {
            if labels[i] == labels[j] {
                acc[[i, j]] += 1;
                acc[[j, i]] += 1;
            }
        }
    }
    acc
}

fn co_assignment_counts_sequential<L: PartialEq>(partitions: ArrayView2<'_, L>) -> Array2<u32> {
    let nodes = partitions.ncols();
    partitions
        .outer_iter()
        .fold(Array2::zeros((nodes, nodes)), accumulate_run)
}

fn co_assignment_counts_parallel<L: PartialEq + Sync>(partitions: ArrayView2<'_, L>) -> Array2<u32> {
    let nodes = partitions.ncols();
    (0..partitions.nrows())
        .into_par_iter()
        .fold(
            || Array2::zeros((nodes, nodes)),
            |acc, r| accumulate_run(acc, partitions.row(r)),
        )
        .reduce(|| Array2::zeros((nodes, nodes)), |a, b| a + b)
}

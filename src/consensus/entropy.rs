//! Consensus entropy: mean binary entropy of pairwise co-assignment

use crate::consensus::ConsensusMatrix;
use crate::partition::entropy::safe_log;

/// How node pairs are counted when averaging binary entropies.
///
/// Both give the same value on a symmetric matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Pairs i<j, divided by N(N-1)/2
    #[default]
    UnorderedPairs,

    /// Pairs i≠j, divided by N(N-1)
    OrderedPairs,
}

/// Binary entropy of a Bernoulli probability, with `0 · ln 0 = 0`
#[inline]
pub fn binary_entropy(p: f64) -> f64 {
    -(p * safe_log(p) + (1.0 - p) * safe_log(1.0 - p))
}

/// Mean binary entropy of the off-diagonal co-assignment probabilities.
///
/// Zero when every pair is always or never co-assigned; `ln 2` when every
/// pair is co-assigned in exactly half the runs. Defined as 0 for N ≤ 1.
pub fn consensus_entropy(matrix: &ConsensusMatrix, normalization: Normalization) -> f64 {
    let n = matrix.node_count();
    if n < 2 {
        return 0.0;
    }

    let values = matrix.values();
    let mut sum = 0.0;
    let denom = match normalization {
        Normalization::UnorderedPairs => {
            for i in 0..n {
                for j in (i + 1)..n {
                    sum += binary_entropy(values[[i, j]]);
                }
            }
            (n * (n - 1)) as f64 / 2.0
        }
        Normalization::OrderedPairs => {
            for i in 0..n {
                for j in 0..n {
                    if i != j {
                        sum += binary_entropy(values[[i, j]]);
                    }
                }
            }
            (n * (n - 1)) as f64
        }
    };

    sum / denom
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array2};
    use std::f64::consts::LN_2;

    #[test]
    fn test_binary_entropy_endpoints() {
        assert_eq!(binary_entropy(0.0), 0.0);
        assert_eq!(binary_entropy(1.0), 0.0);
        assert!((binary_entropy(0.5) - LN_2).abs() < 1e-12);
    }

    #[test]
    fn test_stable_partitions_have_zero_entropy() {
        let parts = arr2(&[[0, 0, 1, 1], [0, 0, 1, 1], [0, 0, 1, 1]]);
        let c = ConsensusMatrix::from_partitions(parts.view()).unwrap();
        assert_eq!(c.entropy(), 0.0);
    }

    #[test]
    fn test_half_agreement_is_ln2() {
        let mut values = Array2::from_elem((5, 5), 0.5);
        values.diag_mut().fill(1.0);
        let c = ConsensusMatrix::from_values(values, 2).unwrap();
        assert!((c.entropy() - LN_2).abs() < 1e-12);
        assert!((consensus_entropy(&c, Normalization::OrderedPairs) - LN_2).abs() < 1e-12);
    }

    #[test]
    fn test_normalizations_agree() {
        let parts = arr2(&[
            [0, 0, 1, 1, 2],
            [0, 1, 1, 2, 2],
            [0, 0, 0, 1, 1],
            [1, 0, 1, 0, 1],
        ]);
        let c = ConsensusMatrix::from_partitions(parts.view()).unwrap();
        let unordered = consensus_entropy(&c, Normalization::UnorderedPairs);
        let ordered = consensus_entropy(&c, Normalization::OrderedPairs);
        assert!(unordered > 0.0);
        assert!((unordered - ordered).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_sizes() {
        let single = ConsensusMatrix::from_values(arr2(&[[1.0]]), 3).unwrap();
        assert_eq!(single.entropy(), 0.0);

        let empty = ConsensusMatrix::from_values(Array2::zeros((0, 0)), 3).unwrap();
        assert_eq!(consensus_entropy(&empty, Normalization::OrderedPairs), 0.0);
    }
}

//! Partition data model
//!
//! A partition assigns one opaque label to each node. Labels are only ever
//! compared for equality and used as map keys, so every algorithm in this
//! crate is generic over `L: Eq + Hash`.

pub mod distance;
pub mod entropy;

use crate::error::RobustnessError;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Community label as it appears in results files (integer or text)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(v) => write!(f, "{}", v),
            Label::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Label {
    fn from(v: i64) -> Self {
        Label::Int(v)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

/// One clustering run: a partition and its modularity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run<L = Label> {
    /// Modularity Q reported by the clustering step
    #[serde(rename = "Q")]
    pub modularity: f64,

    /// One label per node
    pub partition: Vec<L>,
}

impl<L: Eq + Hash> Run<L> {
    pub fn new(modularity: f64, partition: Vec<L>) -> Self {
        Self { modularity, partition }
    }

    /// Number of distinct communities in this run
    pub fn community_count(&self) -> usize {
        self.partition.iter().collect::<HashSet<_>>().len()
    }
}

/// All runs produced under one noise level `p`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseLevelGroup<L = Label> {
    pub p: f64,
    pub runs: Vec<Run<L>>,
}

impl<L: Clone> NoiseLevelGroup<L> {
    pub fn new(p: f64, runs: Vec<Run<L>>) -> Self {
        Self { p, runs }
    }

    /// Check that the group is non-empty and every partition has the same length.
    ///
    /// N is the length shared by most runs (earliest run wins ties), so the
    /// reported run is the outlier. Returns N.
    pub fn validate(&self) -> Result<usize, RobustnessError> {
        if self.runs.is_empty() {
            return Err(RobustnessError::EmptyGroup { p: self.p });
        }

        let mut length_counts: HashMap<usize, usize> = HashMap::new();
        for r in &self.runs {
            *length_counts.entry(r.partition.len()).or_insert(0) += 1;
        }
        let most_common = length_counts.values().copied().max().unwrap_or(0);
        let expected = self
            .runs
            .iter()
            .map(|r| r.partition.len())
            .find(|len| length_counts[len] == most_common)
            .unwrap_or(0);

        for (run, r) in self.runs.iter().enumerate() {
            if r.partition.len() != expected {
                return Err(RobustnessError::ShapeMismatch {
                    p: self.p,
                    run,
                    expected,
                    found: r.partition.len(),
                });
            }
        }

        Ok(expected)
    }

    /// Modularity scores in run order
    pub fn modularities(&self) -> Vec<f64> {
        self.runs.iter().map(|r| r.modularity).collect()
    }

    /// Stack the partitions into an R×N label matrix (one row per run)
    pub fn stack_partitions(&self) -> Result<Array2<L>, RobustnessError> {
        let nodes = self.validate()?;
        Ok(Array2::from_shape_fn((self.runs.len(), nodes), |(r, i)| {
            self.runs[r].partition[i].clone()
        }))
    }
}

/// Cross-tabulation of two equal-length label sequences.
///
/// Labels are coded in order of first appearance, so iteration order over
/// the table (and therefore floating-point summation order) is reproducible.
#[derive(Debug, Clone)]
pub struct ContingencyTable {
    /// Joint counts, rows indexed by codes of the first partition
    pub joint: Array2<u32>,

    /// Row marginals
    pub left: Vec<u32>,

    /// Column marginals
    pub right: Vec<u32>,

    /// Number of labelled nodes
    pub total: usize,
}

impl ContingencyTable {
    pub fn new<L: Eq + Hash>(
        x: ArrayView1<'_, L>,
        y: ArrayView1<'_, L>,
    ) -> Result<Self, RobustnessError> {
        if x.len() != y.len() {
            return Err(RobustnessError::LengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }

        let (x_codes, x_classes) = encode_labels(x);
        let (y_codes, y_classes) = encode_labels(y);

        let mut joint = Array2::<u32>::zeros((x_classes, y_classes));
        let mut left = vec![0u32; x_classes];
        let mut right = vec![0u32; y_classes];

        for (&a, &b) in x_codes.iter().zip(y_codes.iter()) {
            joint[[a, b]] += 1;
            left[a] += 1;
            right[b] += 1;
        }

        Ok(Self {
            joint,
            left,
            right,
            total: x.len(),
        })
    }
}

/// Map each label to a dense code assigned in order of first appearance.
///
/// Returns the code sequence and the number of distinct labels.
pub fn encode_labels<L: Eq + Hash>(labels: ArrayView1<'_, L>) -> (Vec<usize>, usize) {
    let mut codes: HashMap<&L, usize> = HashMap::new();
    let encoded = labels
        .iter()
        .map(|label| {
            let next = codes.len();
            *codes.entry(label).or_insert(next)
        })
        .collect();
    (encoded, codes.len())
}

/// Per-class counts in order of first appearance
pub fn label_counts<L: Eq + Hash>(labels: ArrayView1<'_, L>) -> Vec<u32> {
    let (codes, classes) = encode_labels(labels);
    let mut counts = vec![0u32; classes];
    for code in codes {
        counts[code] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::aview1;

    fn group(p: f64, parts: &[&[i64]]) -> NoiseLevelGroup<i64> {
        NoiseLevelGroup::new(
            p,
            parts
                .iter()
                .enumerate()
                .map(|(i, part)| Run::new(i as f64 * 0.1, part.to_vec()))
                .collect(),
        )
    }

    #[test]
    fn test_label_deserializes_ints_and_strings() {
        let labels: Vec<Label> = serde_json::from_str(r#"[0, "a", 7]"#).unwrap();
        assert_eq!(labels, vec![Label::Int(0), Label::from("a"), Label::Int(7)]);
        assert_eq!(labels[1].to_string(), "a");
    }

    #[test]
    fn test_validate_returns_node_count() {
        let g = group(0.2, &[&[0, 0, 1], &[1, 1, 0]]);
        assert_eq!(g.validate(), Ok(3));
    }

    #[test]
    fn test_validate_empty_group() {
        let g: NoiseLevelGroup<i64> = NoiseLevelGroup::new(0.3, Vec::new());
        assert_eq!(g.validate(), Err(RobustnessError::EmptyGroup { p: 0.3 }));
    }

    #[test]
    fn test_validate_reports_offending_run() {
        let g = group(0.5, &[&[0, 0, 1], &[0, 1, 1], &[0, 1]]);
        assert_eq!(
            g.validate(),
            Err(RobustnessError::ShapeMismatch {
                p: 0.5,
                run: 2,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_validate_blames_outlier_first_run() {
        let g = group(0.2, &[&[0, 1], &[0, 1, 1], &[1, 1, 0]]);
        assert_eq!(
            g.validate(),
            Err(RobustnessError::ShapeMismatch {
                p: 0.2,
                run: 0,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_validate_tie_uses_earliest_length() {
        let g = group(0.4, &[&[0, 1, 1], &[0, 1]]);
        assert_eq!(
            g.validate(),
            Err(RobustnessError::ShapeMismatch {
                p: 0.4,
                run: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_stack_partitions_shape() {
        let g = group(0.0, &[&[0, 0, 1, 1], &[0, 1, 0, 1]]);
        let stacked = g.stack_partitions().unwrap();
        assert_eq!(stacked.dim(), (2, 4));
        assert_eq!(stacked[[1, 1]], 1);
    }

    #[test]
    fn test_encode_labels_first_appearance() {
        let (codes, classes) = encode_labels(aview1(&["b", "a", "b", "c"]));
        assert_eq!(codes, vec![0, 1, 0, 2]);
        assert_eq!(classes, 3);
    }

    #[test]
    fn test_contingency_table_counts() {
        let table = ContingencyTable::new(aview1(&[0, 0, 1, 1]), aview1(&[0, 1, 0, 1])).unwrap();
        assert_eq!(table.joint, ndarray::arr2(&[[1u32, 1], [1, 1]]));
        assert_eq!(table.left, vec![2, 2]);
        assert_eq!(table.right, vec![2, 2]);
        assert_eq!(table.total, 4);
    }

    #[test]
    fn test_contingency_table_length_mismatch() {
        let err = ContingencyTable::new(aview1(&[0, 1]), aview1(&[0])).unwrap_err();
        assert_eq!(err, RobustnessError::LengthMismatch { left: 2, right: 1 });
    }

    #[test]
    fn test_community_count() {
        let run = Run::new(0.4, vec![3, 3, 9, 1]);
        assert_eq!(run.community_count(), 3);
    }
}

//! Error types for robustness analysis

use thiserror::Error;

/// Validation failures raised while summarizing partitions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RobustnessError {
    /// A noise level arrived with no runs at all
    #[error("noise level p={p} has no runs")]
    EmptyGroup { p: f64 },

    /// A run's partition length disagrees with the rest of its noise level
    #[error("noise level p={p}: run {run} has {found} labels, expected {expected}")]
    ShapeMismatch {
        p: f64,
        run: usize,
        expected: usize,
        found: usize,
    },

    /// Two partitions compared directly have different lengths
    #[error("partitions differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
}

impl RobustnessError {
    /// Noise level the error belongs to, if it is tied to one
    pub fn p(&self) -> Option<f64> {
        match self {
            Self::EmptyGroup { p } | Self::ShapeMismatch { p, .. } => Some(*p),
            Self::LengthMismatch { .. } => None,
        }
    }
}

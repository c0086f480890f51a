//! Robustness signals across repeated partitions

pub mod baseline;
pub mod sampler;
pub mod stats;
pub mod summary;

pub use sampler::{mean_pairwise_vi, PairSampling, DEFAULT_PAIR_SEED};
pub use summary::{summarize, summarize_level, summarize_strict, SummaryReport, SummaryRow};

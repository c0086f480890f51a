//! Core library functions for partition robustness analysis
//!
//! Turns repeated community-detection runs per noise level into a consensus
//! matrix, a consensus entropy and a mean pairwise Variation of Information.

pub mod config;
pub mod consensus;
pub mod data;
pub mod error;
pub mod partition;
pub mod robustness;
pub mod storage;

pub use anyhow::{Result, anyhow};
pub use config::Config;
pub use consensus::ConsensusMatrix;
pub use error::RobustnessError;
pub use partition::{Label, NoiseLevelGroup, Run};
pub use robustness::{SummaryReport, SummaryRow};

//! Per-noise-level robustness summary

use crate::config::Config;
use crate::consensus::ConsensusMatrix;
use crate::error::RobustnessError;
use crate::partition::NoiseLevelGroup;
use crate::robustness::sampler::mean_pairwise_vi;
use crate::robustness::stats::ModularityStats;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// One summary row per noise level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub p: f64,

    #[serde(rename = "Q_mean")]
    pub q_mean: f64,

    #[serde(rename = "Q_std")]
    pub q_std: f64,

    /// 25th percentile of Q
    #[serde(rename = "Q_lo")]
    pub q_lo: f64,

    /// 75th percentile of Q
    #[serde(rename = "Q_hi")]
    pub q_hi: f64,

    /// Consensus entropy
    #[serde(rename = "H")]
    pub consensus_entropy: f64,

    /// Mean pairwise Variation of Information
    #[serde(rename = "VI")]
    pub mean_vi: f64,
}

/// Rows for every level that could be summarized, plus the levels that
/// failed validation. Both are ordered by ascending `p`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryReport {
    pub rows: Vec<SummaryRow>,
    pub failures: Vec<RobustnessError>,
}

impl SummaryReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Summarize a single noise level.
///
/// Shape and emptiness are validated before any matrix work.
pub fn summarize_level<L>(group: &NoiseLevelGroup<L>, config: &Config) -> Result<SummaryRow, RobustnessError>
where
    L: Eq + Hash + Clone + Sync,
{
    let partitions = group.stack_partitions()?;
    let (runs, nodes) = partitions.dim();
    log::debug!("Summarizing p={} ({} runs over {} nodes)", group.p, runs, nodes);

    let q = ModularityStats::from_scores(&group.modularities())
        .ok_or(RobustnessError::EmptyGroup { p: group.p })?;

    let consensus = ConsensusMatrix::from_partitions(partitions.view())
        .ok_or(RobustnessError::EmptyGroup { p: group.p })?;
    let consensus_entropy = consensus.entropy();

    let mean_vi = mean_pairwise_vi(partitions.view(), config.sampling())?;

    Ok(SummaryRow {
        p: group.p,
        q_mean: q.mean,
        q_std: q.std_dev,
        q_lo: q.lower_quartile,
        q_hi: q.upper_quartile,
        consensus_entropy,
        mean_vi,
    })
}

/// Summarize every noise level, ordered by ascending `p`.
///
/// A malformed level is reported in `failures` and does not stop the rest.
pub fn summarize<L>(groups: &[NoiseLevelGroup<L>], config: &Config) -> SummaryReport
where
    L: Eq + Hash + Clone + Send + Sync,
{
    let mut order: Vec<usize> = (0..groups.len()).collect();
    order.sort_by(|&a, &b| groups[a].p.total_cmp(&groups[b].p));

    log::info!("Summarizing {} noise levels", groups.len());

    let outcomes: Vec<Result<SummaryRow, RobustnessError>> = if config.parallel {
        order
            .par_iter()
            .map(|&i| summarize_level(&groups[i], config))
            .collect()
    } else {
        order
            .iter()
            .map(|&i| summarize_level(&groups[i], config))
            .collect()
    };

    let mut report = SummaryReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(row) => report.rows.push(row),
            Err(e) => {
                log::warn!("Skipping noise level: {}", e);
                report.failures.push(e);
            }
        }
    }

    report
}

/// Like [`summarize`], but fails on the first malformed level (lowest `p`)
pub fn summarize_strict<L>(
    groups: &[NoiseLevelGroup<L>],
    config: &Config,
) -> Result<Vec<SummaryRow>, RobustnessError>
where
    L: Eq + Hash + Clone + Send + Sync,
{
    let report = summarize(groups, config);
    match report.failures.into_iter().next() {
        Some(e) => Err(e),
        None => Ok(report.rows),
    }
}

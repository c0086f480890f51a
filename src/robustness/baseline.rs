//! Baseline run selection

use crate::partition::{NoiseLevelGroup, Run};

/// Tolerance used when matching the unperturbed level `p = 0`
pub const BASELINE_TOLERANCE: f64 = 1e-12;

/// Highest-modularity run of the level whose `p` lies within `tolerance` of
/// the requested value. Ties keep the earliest run.
pub fn baseline_run<L>(groups: &[NoiseLevelGroup<L>], p: f64, tolerance: f64) -> Option<&Run<L>> {
    let level = groups.iter().find(|g| (g.p - p).abs() < tolerance)?;

    let mut runs = level.runs.iter();
    let first = runs.next()?;
    Some(runs.fold(first, |best, run| {
        if run.modularity > best.modularity {
            run
        } else {
            best
        }
    }))
}

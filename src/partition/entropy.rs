//! Entropy primitives over label distributions
//!
//! All estimators use the convention `0 · ln 0 = 0`, so zero-probability
//! classes and empty contingency cells simply contribute nothing.

use crate::error::RobustnessError;
use crate::partition::{label_counts, ContingencyTable};
use ndarray::ArrayView1;
use std::hash::Hash;

/// Natural log that returns 0 for non-positive input
#[inline]
pub fn safe_log(x: f64) -> f64 {
    if x > 0.0 {
        x.ln()
    } else {
        0.0
    }
}

/// Shannon entropy (nats) of a vector of class counts
pub fn entropy_from_counts(counts: &[u32]) -> f64 {
    let total: u64 = counts.iter().map(|&c| c as u64).sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    -counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * safe_log(p)
        })
        .sum::<f64>()
}

/// Shannon entropy H(X) of the empirical label distribution
pub fn shannon_entropy<L: Eq + Hash>(labels: ArrayView1<'_, L>) -> f64 {
    entropy_from_counts(&label_counts(labels))
}

/// Mutual information I(X;Y) of a contingency table
pub fn mutual_information_from_table(table: &ContingencyTable) -> f64 {
    if table.total == 0 {
        return 0.0;
    }
    let total = table.total as f64;

    let mut mi = 0.0;
    for ((i, j), &count) in table.joint.indexed_iter() {
        if count == 0 {
            continue;
        }
        let pxy = count as f64 / total;
        let px = table.left[i] as f64 / total;
        let py = table.right[j] as f64 / total;
        mi += pxy * (safe_log(pxy) - safe_log(px) - safe_log(py));
    }
    mi
}

/// Mutual information I(X;Y) between two partitions of the same nodes
pub fn mutual_information<L: Eq + Hash>(
    x: ArrayView1<'_, L>,
    y: ArrayView1<'_, L>,
) -> Result<f64, RobustnessError> {
    let table = ContingencyTable::new(x, y)?;
    Ok(mutual_information_from_table(&table))
}

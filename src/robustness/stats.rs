//! Descriptive statistics for per-run modularity scores

use statrs::statistics::Statistics;

/// Location and spread of modularity scores within one noise level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModularityStats {
    pub mean: f64,

    /// Sample standard deviation (n-1 divisor); 0 for a single score
    pub std_dev: f64,

    /// 25th percentile
    pub lower_quartile: f64,

    /// 75th percentile
    pub upper_quartile: f64,
}

impl ModularityStats {
    /// Summarize a set of scores, or `None` if there are none
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let mean = scores.mean();
        let std_dev = if scores.len() > 1 { scores.std_dev() } else { 0.0 };

        let mut sorted = scores.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            mean,
            std_dev,
            lower_quartile: quantile(&sorted, 0.25),
            upper_quartile: quantile(&sorted, 0.75),
        })
    }
}

/// Quantile of ascending-sorted data by linear interpolation between order
/// statistics (position `(n-1)·q`).
///
/// Returns NaN for empty input; `q` is clamped to [0, 1].
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let pos = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;

    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_interpolates() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&data, 0.25) - 1.75).abs() < 1e-12);
        assert!((quantile(&data, 0.75) - 3.25).abs() < 1e-12);
        assert_eq!(quantile(&data, 0.0), 1.0);
        assert_eq!(quantile(&data, 1.0), 4.0);
    }

    #[test]
    fn test_quantile_on_order_statistic() {
        let data = [0.1, 0.2, 0.3, 0.4, 0.5];
        assert_eq!(quantile(&data, 0.25), 0.2);
        assert_eq!(quantile(&data, 0.75), 0.4);
    }

    #[test]
    fn test_quantile_empty() {
        assert!(quantile(&[], 0.5).is_nan());
    }

    #[test]
    fn test_stats_single_score() {
        let stats = ModularityStats::from_scores(&[0.42]).unwrap();
        assert_eq!(stats.mean, 0.42);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.lower_quartile, 0.42);
        assert_eq!(stats.upper_quartile, 0.42);
    }

    #[test]
    fn test_stats_sample_std() {
        // Unsorted input; sample variance of [2,4,4,4,5,5,7,9] is 32/7
        let stats = ModularityStats::from_scores(&[9.0, 2.0, 4.0, 5.0, 4.0, 7.0, 4.0, 5.0]).unwrap();
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert!((stats.lower_quartile - 4.0).abs() < 1e-12);
        assert!((stats.upper_quartile - 5.5).abs() < 1e-12);
    }

    #[test]
    fn test_stats_empty() {
        assert!(ModularityStats::from_scores(&[]).is_none());
    }
}

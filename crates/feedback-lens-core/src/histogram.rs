//! Score distribution: equal-width bins plus a smoothed density curve.
//!
//! Bins span the observed range. When every score is equal, the range is
//! widened by 0.5 on each side so the single value still has a bin. The
//! smoothed curve is a Gaussian kernel density estimate with Scott's rule
//! bandwidth, scaled to the same units as the bin counts.

use schemars::JsonSchema;
use serde::Serialize;

use crate::error::{SentimentError, SentimentOutcome};

/// One histogram bucket, `[lower, upper)`; the last one also includes `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Bin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge.
    pub upper: f64,
    /// Number of scores in the bucket.
    pub count: usize,
    /// Smoothed count at the bucket midpoint, if a curve could be fitted.
    pub smoothed: Option<f64>,
}

/// Binned score distribution.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Histogram {
    /// Buckets from lowest to highest.
    pub bins: Vec<Bin>,
    /// Number of finite scores binned.
    pub total: usize,
    /// Kernel bandwidth, absent when fewer than two distinct scores exist.
    pub bandwidth: Option<f64>,
}

impl Histogram {
    /// Bin `scores` into `bins` equal-width buckets.
    ///
    /// Non-finite scores are skipped. An empty input yields an empty
    /// histogram.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::InvalidBins`] if `bins` is zero.
    #[tracing::instrument(skip(scores), fields(n = scores.len()))]
    pub fn from_scores(scores: &[f64], bins: usize) -> SentimentOutcome<Self> {
        if bins == 0 {
            return Err(SentimentError::InvalidBins);
        }

        let values: Vec<f64> = scores.iter().copied().filter(|s| s.is_finite()).collect();
        if values.is_empty() {
            return Ok(Self {
                bins: Vec::new(),
                total: 0,
                bandwidth: None,
            });
        }

        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0usize; bins];
        for &v in &values {
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let bandwidth = scott_bandwidth(&values);
        let buckets = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let lower = lo + width * i as f64;
                let upper = if i + 1 == bins { hi } else { lower + width };
                let mid = (lower + upper) / 2.0;
                let smoothed = bandwidth.map(|h| {
                    gaussian_density(&values, mid, h) * values.len() as f64 * width
                });
                Bin {
                    lower,
                    upper,
                    count,
                    smoothed,
                }
            })
            .collect();

        Ok(Self {
            bins: buckets,
            total: values.len(),
            bandwidth,
        })
    }

    /// Largest bucket count, or 0 for an empty histogram.
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Whether any scores were binned.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Scott's rule: `sigma * n^(-1/5)`, using the sample standard deviation.
fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let nf = n as f64;
    let mean = values.iter().sum::<f64>() / nf;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (nf - 1.0);
    let sigma = variance.sqrt();
    (sigma > 0.0).then(|| sigma * nf.powf(-0.2))
}

fn gaussian_density(values: &[f64], x: f64, h: f64) -> f64 {
    let norm = 1.0 / (values.len() as f64 * h * (2.0 * std::f64::consts::PI).sqrt());
    let sum: f64 = values
        .iter()
        .map(|v| {
            let u = (x - v) / h;
            (-0.5 * u * u).exp()
        })
        .sum();
    norm * sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bins_is_an_error() {
        let err = Histogram::from_scores(&[0.1, 0.2], 0).unwrap_err();
        assert!(matches!(err, SentimentError::InvalidBins));
    }

    #[test]
    fn empty_input_gives_empty_histogram() {
        let h = Histogram::from_scores(&[], 30).unwrap();
        assert!(h.is_empty());
        assert!(h.bins.is_empty());
        assert_eq!(h.max_count(), 0);
    }

    #[test]
    fn counts_sum_to_total() {
        let scores = [-0.9, -0.5, -0.1, 0.0, 0.0, 0.3, 0.62, 0.86, 0.99];
        let h = Histogram::from_scores(&scores, 30).unwrap();
        assert_eq!(h.bins.len(), 30);
        assert_eq!(h.total, scores.len());
        assert_eq!(h.bins.iter().map(|b| b.count).sum::<usize>(), scores.len());
    }

    #[test]
    fn extremes_land_in_end_bins() {
        let h = Histogram::from_scores(&[-1.0, 0.0, 1.0], 4).unwrap();
        assert_eq!(h.bins[0].count, 1);
        assert_eq!(h.bins[3].count, 1);
        assert_eq!(h.bins[0].lower, -1.0);
        assert_eq!(h.bins[3].upper, 1.0);
    }

    #[test]
    fn edges_are_contiguous() {
        let h = Histogram::from_scores(&[-0.7, 0.1, 0.4, 0.9], 5).unwrap();
        for pair in h.bins.windows(2) {
            assert!((pair[0].upper - pair[1].lower).abs() < 1e-12);
        }
    }

    #[test]
    fn identical_scores_widen_range() {
        let h = Histogram::from_scores(&[0.0, 0.0, 0.0], 2).unwrap();
        assert_eq!(h.bins[0].lower, -0.5);
        assert_eq!(h.bins[1].upper, 0.5);
        assert_eq!(h.bins[1].count, 3);
        assert_eq!(h.bandwidth, None);
        assert!(h.bins.iter().all(|b| b.smoothed.is_none()));
    }

    #[test]
    fn non_finite_scores_are_skipped() {
        let h = Histogram::from_scores(&[f64::NAN, 0.5, f64::INFINITY, -0.5], 2).unwrap();
        assert_eq!(h.total, 2);
    }

    #[test]
    fn smoothed_curve_peaks_near_mode() {
        let mut scores = vec![0.0; 20];
        scores.extend([-0.8, -0.4, 0.4, 0.8]);
        let h = Histogram::from_scores(&scores, 9).unwrap();
        assert!(h.bandwidth.is_some());

        let peak = h
            .bins
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.smoothed.unwrap().total_cmp(&b.1.smoothed.unwrap()))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak, 4);
    }

    #[test]
    fn scott_bandwidth_matches_formula() {
        // sample std of [0, 1] is sqrt(0.5); n^(-1/5) with n = 2
        let h = scott_bandwidth(&[0.0, 1.0]).unwrap();
        assert!((h - 0.5f64.sqrt() * 2f64.powf(-0.2)).abs() < 1e-12);
        assert_eq!(scott_bandwidth(&[0.3]), None);
    }
}

//! Metrics Calculator Service
//!
//! Pure domain logic turning a region's pings into aggregate statistics.
//! This service has NO external dependencies - it's pure Rust.

use crate::domain::entities::{Ping, RegionMetrics};
use crate::domain::value_objects::Precision;

/// Quantile reported as `p95_latency`.
const P95: f64 = 0.95;

/// Calculator for per-region statistics.
///
/// The statistics are:
/// 1. Mean latency
/// 2. 95th percentile latency (linear interpolation between closest ranks)
/// 3. Mean uptime, in the dataset's own unit
/// 4. Breaches: pings with latency strictly above the threshold
///
/// An empty input yields all-zero metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsCalculator {
    precision: Precision,
}

impl MetricsCalculator {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Compute the statistics for one region's pings.
    ///
    /// # Example
    /// ```
    /// use region_latency::domain::services::MetricsCalculator;
    /// use region_latency::domain::Ping;
    ///
    /// let pings = vec![
    ///     Ping::new("emea", 150.0, 1.0),
    ///     Ping::new("emea", 200.0, 1.0),
    ///     Ping::new("emea", 170.0, 1.0),
    /// ];
    /// let m = MetricsCalculator::default().compute(&pings, 180);
    /// assert_eq!(m.avg_latency, 173.33);
    /// assert_eq!(m.p95_latency, 197.0);
    /// assert_eq!(m.breaches, 1);
    /// ```
    pub fn compute(&self, pings: &[Ping], threshold_ms: i64) -> RegionMetrics {
        if pings.is_empty() {
            return RegionMetrics::empty();
        }

        let n = pings.len() as f64;
        let threshold = threshold_ms as f64;

        let mut latencies: Vec<f64> = pings.iter().map(|p| p.latency_ms).collect();
        let avg_latency = latencies.iter().sum::<f64>() / n;
        let avg_uptime = pings.iter().map(|p| p.uptime).sum::<f64>() / n;
        let breaches = latencies.iter().filter(|&&l| l > threshold).count() as u64;

        latencies.sort_by(f64::total_cmp);
        let p95_latency = percentile(&latencies, P95);

        RegionMetrics {
            avg_latency: round_to(avg_latency, self.precision.latency_decimals),
            p95_latency: round_to(p95_latency, self.precision.latency_decimals),
            avg_uptime: round_to(avg_uptime, self.precision.uptime_decimals),
            breaches,
        }
    }
}

/// Quantile `q` (0.0..=1.0) of an ascending slice, interpolating linearly
/// between the two closest ranks.
///
/// rank = q * (n - 1); result = v[floor] + frac(rank) * (v[floor + 1] - v[floor]).
/// Returns 0.0 for an empty slice.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    let Some(last) = sorted.len().checked_sub(1) else {
        return 0.0;
    };

    let rank = q.clamp(0.0, 1.0) * last as f64;
    let lo = rank.floor() as usize;
    let hi = (lo + 1).min(last);
    let frac = rank - lo as f64;

    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Round half away from zero to `decimals` places.
///
/// `decimals` is capped at [`Precision::MAX_DECIMALS`]. Values too large to
/// scale are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(Precision::MAX_DECIMALS) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

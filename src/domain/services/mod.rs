mod metrics_calculator;

pub use metrics_calculator::{percentile, round_to, MetricsCalculator};

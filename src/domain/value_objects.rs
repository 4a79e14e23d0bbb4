//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};

/// Number of decimal places kept for each reported statistic.
///
/// Latency figures (mean and p95) share one precision, uptime has its own
/// since it is usually a fraction close to 1 where two decimals hide
/// everything interesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precision {
    /// Decimals for `avg_latency` and `p95_latency`
    pub latency_decimals: u32,
    /// Decimals for `avg_uptime`
    pub uptime_decimals: u32,
}

impl Precision {
    /// Most decimals an f64 can meaningfully be rounded to.
    pub const MAX_DECIMALS: u32 = 15;

    pub fn new(latency_decimals: u32, uptime_decimals: u32) -> Self {
        Self {
            latency_decimals,
            uptime_decimals,
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::new(2, 4)
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "latency={}dp uptime={}dp",
            self.latency_decimals, self.uptime_decimals
        )
    }
}

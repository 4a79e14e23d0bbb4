//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the latency analytics
//! domain. They carry no I/O and are validated once, at the boundary.

use crate::domain::errors::ValidationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One telemetry sample.
///
/// Pings are only constructed by the dataset loader after validation, so
/// `region` is never empty and `latency_ms` is finite and non-negative.
/// `uptime` is passed through in whatever unit the dataset uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Ping {
    /// Region identifier (emea, amer, apac, ...)
    pub region: String,
    /// Measured latency in milliseconds
    pub latency_ms: f64,
    /// Uptime indicator (fraction, percentage or counter, fixed per dataset)
    pub uptime: f64,
}

impl Ping {
    pub fn new(region: impl Into<String>, latency_ms: f64, uptime: f64) -> Self {
        Self {
            region: region.into(),
            latency_ms,
            uptime,
        }
    }
}

/// Aggregate statistics for a single region.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionMetrics {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: u64,
}

impl RegionMetrics {
    /// Metrics reported for a region without any pings.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A request for per-region metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsRequest {
    /// Regions to report on, in output order. Duplicates and unknown
    /// regions are allowed.
    pub regions: Vec<String>,
    /// Latency above which a ping counts as a breach.
    pub threshold_ms: i64,
}

impl MetricsRequest {
    pub fn new<I, S>(regions: I, threshold_ms: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regions: regions.into_iter().map(Into::into).collect(),
            threshold_ms,
        }
    }

    /// Validate an untyped JSON body into a request.
    ///
    /// The whole body is checked before anything is returned, so a caller
    /// never computes metrics for half of a malformed request.
    pub fn from_json(body: &serde_json::Value) -> Result<Self, ValidationError> {
        let obj = body.as_object().ok_or(ValidationError::NotAnObject)?;

        let regions = obj
            .get("regions")
            .ok_or(ValidationError::MissingField("regions"))?
            .as_array()
            .ok_or(ValidationError::RegionsNotSequence)?
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or(ValidationError::RegionNotString(i))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let threshold = obj
            .get("threshold_ms")
            .ok_or(ValidationError::MissingField("threshold_ms"))?;
        let threshold_ms = match threshold.as_i64() {
            Some(t) => t,
            // Integers above i64::MAX only fit in u64.
            None if threshold.is_u64() => return Err(ValidationError::ThresholdOutOfRange),
            None => return Err(ValidationError::ThresholdNotInteger),
        };

        Ok(Self {
            regions,
            threshold_ms,
        })
    }
}

/// Ordered mapping of region to metrics, in request order.
///
/// Serializes as a JSON object. A region requested twice keeps the slot of
/// its first occurrence.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RegionReport {
    entries: IndexMap<String, RegionMetrics>,
}

impl RegionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert metrics for a region, replacing the value in place if the
    /// region is already present.
    pub fn insert(&mut self, region: String, metrics: RegionMetrics) {
        self.entries.insert(region, metrics);
    }

    pub fn contains(&self, region: &str) -> bool {
        self.entries.contains_key(region)
    }

    pub fn get(&self, region: &str) -> Option<&RegionMetrics> {
        self.entries.get(region)
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

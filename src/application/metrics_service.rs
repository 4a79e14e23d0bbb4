//! Metrics Service - Main application use case
//!
//! Answers metrics requests: looks each requested region up in the index,
//! runs the calculator on its pings and assembles the ordered report.
//! This is the primary interface for the inbound adapter.

use crate::domain::entities::{MetricsRequest, RegionReport};
use crate::domain::errors::ValidationError;
use crate::domain::region_index::RegionIndex;
use crate::domain::services::MetricsCalculator;
use serde::Serialize;
use std::sync::Arc;

/// Size of the dataset behind the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub pings: usize,
    pub regions: usize,
}

/// Metrics service - main application use case.
///
/// Holds only immutable state, so a single instance can serve any number
/// of concurrent requests without locking.
pub struct MetricsService {
    index: Arc<RegionIndex>,
    calculator: MetricsCalculator,
}

impl MetricsService {
    /// Create a new metrics service.
    pub fn new(index: Arc<RegionIndex>, calculator: MetricsCalculator) -> Self {
        Self { index, calculator }
    }

    /// Compute the report for a validated request.
    ///
    /// Regions come out in request order. Unknown regions get zero-valued
    /// metrics; a region repeated in the request is computed once and keeps
    /// the position of its first occurrence.
    pub fn handle(&self, request: &MetricsRequest) -> RegionReport {
        let mut report = RegionReport::with_capacity(request.regions.len());

        for region in &request.regions {
            if report.contains(region) {
                continue;
            }
            let pings = self.index.lookup(region);
            let metrics = self.calculator.compute(pings, request.threshold_ms);
            tracing::debug!(
                "region={} pings={} breaches={}",
                region,
                pings.len(),
                metrics.breaches
            );
            report.insert(region.clone(), metrics);
        }

        report
    }

    /// Validate an untyped request body, then compute the report.
    ///
    /// Nothing is computed unless the whole body is valid.
    pub fn handle_json(&self, body: &serde_json::Value) -> Result<RegionReport, ValidationError> {
        let request = MetricsRequest::from_json(body)?;
        Ok(self.handle(&request))
    }

    pub fn dataset_summary(&self) -> DatasetSummary {
        DatasetSummary {
            pings: self.index.ping_count(),
            regions: self.index.region_count(),
        }
    }
}

//! Telemetry Store
//!
//! The immutable, process-lifetime collection of loaded pings.

use crate::domain::entities::Ping;
use crate::domain::errors::LoadError;
use crate::domain::ports::TelemetrySource;

/// Read-only list of pings, built once at startup.
///
/// There is no mutation API; share it behind an `Arc` and every reader
/// sees the same complete dataset.
#[derive(Debug, Clone, Default)]
pub struct TelemetryStore {
    pings: Vec<Ping>,
}

impl TelemetryStore {
    /// Create a store from already validated pings.
    pub fn new(pings: Vec<Ping>) -> Self {
        Self { pings }
    }

    /// Load the store from a telemetry source.
    pub async fn load(source: &dyn TelemetrySource) -> Result<Self, LoadError> {
        let pings = source.load().await?;
        Ok(Self::new(pings))
    }

    /// All pings in dataset order.
    pub fn pings(&self) -> &[Ping] {
        &self.pings
    }

    pub fn len(&self) -> usize {
        self.pings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pings.is_empty()
    }
}

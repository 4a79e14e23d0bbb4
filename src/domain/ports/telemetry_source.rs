//! Telemetry Source Port
//!
//! Defines the interface for loading the ping dataset at startup.

use crate::domain::entities::Ping;
use crate::domain::errors::LoadError;
use async_trait::async_trait;

/// Source of the telemetry dataset.
///
/// This is an outbound port that abstracts where pings come from (a file
/// on disk, a bundled resource). It is called exactly once, before any
/// request is served; malformed individual records are dropped by the
/// implementation and only a dataset that cannot be read at all is an
/// error.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Human readable description used in startup logs.
    fn describe(&self) -> String;

    /// Load every valid ping, in dataset order.
    async fn load(&self) -> Result<Vec<Ping>, LoadError>;
}

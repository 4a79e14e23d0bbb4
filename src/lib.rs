//! Region latency analytics
//!
//! Loads a fixed set of network telemetry pings and answers per-region
//! latency statistics (mean, p95, mean uptime, threshold breaches) over
//! HTTP. Exposed as a library for integration tests.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use adapters::inbound::{ApiServer, ApiState};
pub use adapters::outbound::{EmbeddedTelemetrySource, FileTelemetrySource};
pub use application::MetricsService;
pub use config::load_config;
pub use domain::entities::{MetricsRequest, Ping, RegionMetrics, RegionReport};
pub use domain::errors::{LoadError, ValidationError};
pub use domain::ports::TelemetrySource;
pub use domain::services::MetricsCalculator;
pub use domain::value_objects::Precision;
pub use domain::{RegionIndex, TelemetryStore};

//! Application Layer
//!
//! Use cases wiring the domain together for the inbound adapters.

mod metrics_service;

pub use metrics_service::{DatasetSummary, MetricsService};

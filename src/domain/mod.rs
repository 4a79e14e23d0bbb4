//! Domain Layer
//!
//! Entities, value objects, ports and pure services. Nothing in here
//! performs I/O.

pub mod entities;
pub mod errors;
pub mod ports;
pub mod region_index;
pub mod services;
pub mod store;
pub mod value_objects;

pub use entities::{MetricsRequest, Ping, RegionMetrics, RegionReport};
pub use errors::{LoadError, ValidationError};
pub use region_index::RegionIndex;
pub use store::TelemetryStore;
pub use value_objects::Precision;

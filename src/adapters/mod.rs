//! Adapters Layer
//!
//! Inbound adapters drive the application (HTTP); outbound adapters
//! implement the domain ports (dataset sources).

pub mod inbound;
pub mod outbound;

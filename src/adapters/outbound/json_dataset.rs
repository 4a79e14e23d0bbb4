//! JSON Dataset Parser
//!
//! Shared lenient parser for telemetry datasets. Two layouts are accepted:
//!
//! ```text
//! [ {"region": "emea", "latency_ms": 120, "uptime": 0.998}, ... ]
//! { "emea": [ {"latency_ms": 120, "uptime": 0.998}, ... ], ... }
//! ```
//!
//! `uptime_pct` is accepted in place of `uptime`. Records that fail
//! validation are skipped with a warning; only a dataset that is not one of
//! the two layouts is an error.

use crate::domain::entities::Ping;
use crate::domain::errors::LoadError;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct PingRecord {
    region: String,
    latency_ms: f64,
    #[serde(alias = "uptime_pct")]
    uptime: f64,
}

#[derive(Debug, Deserialize)]
struct RegionSample {
    latency_ms: f64,
    #[serde(alias = "uptime_pct")]
    uptime: f64,
}

/// Parse raw dataset bytes into validated pings.
pub fn parse_dataset(bytes: &[u8]) -> Result<Vec<Ping>, LoadError> {
    let root: Value = serde_json::from_slice(bytes)?;
    parse_value(root)
}

/// Parse an already decoded dataset.
pub fn parse_value(root: Value) -> Result<Vec<Ping>, LoadError> {
    match root {
        Value::Array(records) => Ok(records
            .into_iter()
            .enumerate()
            .filter_map(|(i, record)| record_to_ping(i, record))
            .collect()),
        Value::Object(by_region) => {
            let mut pings = Vec::new();
            for (region, samples) in by_region {
                let Value::Array(samples) = samples else {
                    tracing::warn!("dropping region {:?}: samples are not an array", region);
                    continue;
                };
                pings.extend(
                    samples
                        .into_iter()
                        .enumerate()
                        .filter_map(|(i, sample)| sample_to_ping(&region, i, sample)),
                );
            }
            Ok(pings)
        }
        other => Err(LoadError::NotASequence(kind(&other))),
    }
}

fn record_to_ping(index: usize, record: Value) -> Option<Ping> {
    match serde_json::from_value::<PingRecord>(record) {
        Ok(r) => validate(index, r.region, r.latency_ms, r.uptime),
        Err(e) => {
            tracing::warn!("dropping record {}: {}", index, e);
            None
        }
    }
}

fn sample_to_ping(region: &str, index: usize, sample: Value) -> Option<Ping> {
    match serde_json::from_value::<RegionSample>(sample) {
        Ok(s) => validate(index, region.to_string(), s.latency_ms, s.uptime),
        Err(e) => {
            tracing::warn!("dropping {} record {}: {}", region, index, e);
            None
        }
    }
}

fn validate(index: usize, region: String, latency_ms: f64, uptime: f64) -> Option<Ping> {
    if region.is_empty() {
        tracing::warn!("dropping record {}: empty region", index);
        return None;
    }
    if !latency_ms.is_finite() || latency_ms < 0.0 {
        tracing::warn!("dropping record {}: invalid latency {}", index, latency_ms);
        return None;
    }
    if !uptime.is_finite() {
        tracing::warn!("dropping record {}: invalid uptime {}", index, uptime);
        return None;
    }
    Some(Ping::new(region, latency_ms, uptime))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

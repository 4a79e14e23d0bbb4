//! Embedded Telemetry Source
//!
//! Implements TelemetrySource over JSON text held in memory, by default the
//! sample dataset compiled into the binary.

use crate::adapters::outbound::json_dataset::parse_dataset;
use crate::domain::entities::Ping;
use crate::domain::errors::LoadError;
use crate::domain::ports::TelemetrySource;
use async_trait::async_trait;
use std::borrow::Cow;

const BUNDLED_DATASET: &str = include_str!("../../../data/telemetry.json");

/// Telemetry dataset held in memory.
pub struct EmbeddedTelemetrySource {
    json: Cow<'static, str>,
}

impl EmbeddedTelemetrySource {
    /// The dataset bundled with the binary.
    pub fn bundled() -> Self {
        Self {
            json: Cow::Borrowed(BUNDLED_DATASET),
        }
    }

    /// Arbitrary JSON text.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            json: Cow::Owned(json.into()),
        }
    }
}

#[async_trait]
impl TelemetrySource for EmbeddedTelemetrySource {
    fn describe(&self) -> String {
        match self.json {
            Cow::Borrowed(_) => "bundled dataset".to_string(),
            Cow::Owned(_) => "in-memory dataset".to_string(),
        }
    }

    async fn load(&self) -> Result<Vec<Ping>, LoadError> {
        parse_dataset(self.json.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bundled_dataset_loads() {
        let pings = EmbeddedTelemetrySource::bundled().load().await.unwrap();
        assert_eq!(pings.len(), 12);
        assert_eq!(pings.iter().filter(|p| p.region == "emea").count(), 6);
        assert_eq!(pings.iter().filter(|p| p.region == "amer").count(), 6);
    }

    #[tokio::test]
    async fn test_from_json() {
        let source = EmbeddedTelemetrySource::from_json(
            r#"{"apac": [{"latency_ms": 210, "uptime": 0.97}]}"#,
        );
        let pings = source.load().await.unwrap();
        assert_eq!(pings, vec![Ping::new("apac", 210.0, 0.97)]);
    }

    #[tokio::test]
    async fn test_from_json_not_a_sequence() {
        let source = EmbeddedTelemetrySource::from_json("12");
        assert!(matches!(
            source.load().await.unwrap_err(),
            LoadError::NotASequence("a number")
        ));
    }

    #[test]
    fn test_describe() {
        assert_eq!(EmbeddedTelemetrySource::bundled().describe(), "bundled dataset");
        assert_eq!(
            EmbeddedTelemetrySource::from_json("[]").describe(),
            "in-memory dataset"
        );
    }
}

//! File Telemetry Source
//!
//! Implements TelemetrySource by reading a JSON dataset from disk.

use crate::adapters::outbound::json_dataset::parse_dataset;
use crate::domain::entities::Ping;
use crate::domain::errors::LoadError;
use crate::domain::ports::TelemetrySource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Telemetry dataset stored as a JSON file.
pub struct FileTelemetrySource {
    path: PathBuf,
}

impl FileTelemetrySource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TelemetrySource for FileTelemetrySource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn load(&self) -> Result<Vec<Ping>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        parse_dataset(&bytes)
    }
}

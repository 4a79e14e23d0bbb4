//! Domain Errors
//!
//! Failures that can cross the core boundary. Unknown regions are not
//! errors; they resolve to zero-valued metrics.

/// The telemetry dataset could not be turned into a store.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("dataset must be an array of records or an object keyed by region, found {0}")]
    NotASequence(&'static str),
}

/// A metrics request did not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("`regions` must be an array of strings")]
    RegionsNotSequence,
    #[error("`regions[{0}]` must be a string")]
    RegionNotString(usize),
    #[error("`threshold_ms` must be an integer")]
    ThresholdNotInteger,
    #[error("`threshold_ms` is out of range")]
    ThresholdOutOfRange,
}

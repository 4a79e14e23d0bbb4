mod embedded_telemetry_source;
mod file_telemetry_source;
pub mod json_dataset;

pub use embedded_telemetry_source::EmbeddedTelemetrySource;
pub use file_telemetry_source::FileTelemetrySource;

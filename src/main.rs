//! region-latency - per-region latency analytics API
//!
//! This is the composition root that wires together all the components.

use region_latency::adapters::inbound::{ApiServer, ApiState};
use region_latency::adapters::outbound::{EmbeddedTelemetrySource, FileTelemetrySource};
use region_latency::application::MetricsService;
use region_latency::config::load_config;
use region_latency::domain::ports::TelemetrySource;
use region_latency::domain::services::MetricsCalculator;
use region_latency::domain::{RegionIndex, TelemetryStore};
use region_latency::infrastructure::{shutdown_signal, ShutdownController};
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting region-latency listen={} route={} precision=({})",
        cfg.listen_addr,
        cfg.route,
        cfg.precision()
    );

    // ===== COMPOSITION ROOT =====

    // 1. Telemetry source
    let source: Box<dyn TelemetrySource> = match &cfg.dataset_path {
        Some(path) => Box::new(FileTelemetrySource::new(path)),
        None => Box::new(EmbeddedTelemetrySource::bundled()),
    };

    // 2. Store + index, built once. A failed load still starts the server so
    //    callers get a 503 instead of a connection refusal.
    let service = match TelemetryStore::load(source.as_ref()).await {
        Ok(store) => {
            let index = RegionIndex::build(&store);
            tracing::info!(
                "telemetry loaded from {}: pings={} regions={}",
                source.describe(),
                store.len(),
                index.region_count()
            );
            Ok(Arc::new(MetricsService::new(
                Arc::new(index),
                MetricsCalculator::new(cfg.precision()),
            )))
        }
        Err(e) => {
            tracing::error!("failed to load telemetry from {}: {}", source.describe(), e);
            Err(e)
        }
    };

    // 3. Inbound adapter
    let shutdown = ShutdownController::new();
    tokio::spawn(shutdown_signal(shutdown.clone()));

    let server = ApiServer::new(cfg.listen_addr.clone(), ApiState::new(service, cfg.route.clone()));
    server.run(shutdown).await
}

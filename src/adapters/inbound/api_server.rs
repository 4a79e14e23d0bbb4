//! Latency Metrics API Server
//!
//! HTTP front end for the metrics service. Exposes a single POST call that
//! returns per-region latency statistics, plus a usage banner and a health
//! probe. CORS is open to any origin, as the API is meant to be called from
//! browser dashboards.

use crate::application::{DatasetSummary, MetricsService};
use crate::domain::errors::{LoadError, ValidationError};
use crate::infrastructure::ShutdownController;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Errors returned to API callers as `{"error": <message>}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("telemetry unavailable: {0}")]
    Unavailable(String),
    #[error("analysis failed: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Body(_) | ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("rejected request: {}", self);
        }
        (
            status,
            Json(serde_json::json!({
                "error": self.to_string()
            })),
        )
            .into_response()
    }
}

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dataset_loaded: bool,
    pub pings: usize,
    pub regions: usize,
}

/// API Server state.
#[derive(Clone)]
pub struct ApiState {
    /// Metrics service, or the reason the dataset failed to load
    service: Result<Arc<MetricsService>, Arc<str>>,
    /// Path of the metrics call
    route: Arc<str>,
}

impl ApiState {
    pub fn new(service: Result<Arc<MetricsService>, LoadError>, route: impl Into<String>) -> Self {
        let route: String = route.into();
        Self {
            service: service.map_err(|e| Arc::from(e.to_string())),
            route: Arc::from(route),
        }
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// The metrics service, if the dataset loaded.
    pub fn service(&self) -> Result<&MetricsService, ApiError> {
        self.service
            .as_deref()
            .map_err(|reason| ApiError::Unavailable(reason.to_string()))
    }
}

/// Build the router for the given state.
pub fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::GET])
        .allow_headers(Any);

    let route = state.route().to_string();

    Router::new()
        // Usage banner
        .route("/", get(root_handler))
        // Health endpoint
        .route("/health", get(health_handler))
        // Per-region metrics
        .route(&route, post(metrics_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API Server for latency metrics.
pub struct ApiServer {
    listen_addr: String,
    state: ApiState,
}

impl ApiServer {
    pub fn new(listen_addr: String, state: ApiState) -> Self {
        Self { listen_addr, state }
    }

    /// Bind the configured address and serve until shutdown.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn run(&self, shutdown: ShutdownController) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.listen_addr).await?;
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until shutdown.
    pub async fn serve(
        &self,
        listener: TcpListener,
        shutdown: ShutdownController,
    ) -> anyhow::Result<()> {
        tracing::info!(
            "latency API listening on {} (POST {})",
            listener.local_addr()?,
            self.state.route()
        );

        axum::serve(listener, router(self.state.clone()))
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await?;

        tracing::info!("latency API stopped");
        Ok(())
    }
}

// Handler functions

async fn root_handler(State(state): State<ApiState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": format!(
            "Latency Analysis API - use POST {} with {{\"regions\":[\"emea\",\"amer\"],\"threshold_ms\":180}}",
            state.route()
        )
    }))
}

async fn health_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let (status, summary) = match state.service() {
        Ok(service) => ("ok", service.dataset_summary()),
        Err(_) => ("unavailable", DatasetSummary { pings: 0, regions: 0 }),
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset_loaded: state.service.is_ok(),
        pings: summary.pings,
        regions: summary.regions,
    };
    Json(response)
}

async fn metrics_handler(
    State(state): State<ApiState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let service = state.service()?;
    let Json(body) = body?;

    let report = service.handle_json(&body)?;
    tracing::debug!("computed metrics for {} regions", report.len());

    // Serialized straight from the report; a `serde_json::Value` would
    // re-sort the regions.
    let bytes = serde_json::to_vec(&report).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}

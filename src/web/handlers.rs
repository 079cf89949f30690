//! HTTP handlers for the exporter endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use prometheus::{Encoder, TextEncoder};

use crate::core::collector::JunosCollector;

/// Liveness probe. Reports only that the process is serving requests, not
/// that any target is reachable — per-target health is `junos_up`.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Runs one collection across all targets and renders the result in the
/// Prometheus text exposition format.
pub async fn metrics(
    State(collector): State<Arc<JunosCollector>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let families = collector
        .collect()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&families, &mut buffer)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], buffer))
}

//! HTTP surface of the exporter.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::core::collector::JunosCollector;

pub mod handlers;

/// Builds the exporter's router: a banner page, a liveness endpoint, and
/// the metrics endpoint that drives one collection per scrape.
pub fn create_router(collector: Arc<JunosCollector>) -> Router {
    Router::new()
        .route("/", get(|| async { "junos-exporter" }))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(collector)
}

//! Prometheus metrics endpoint
//!
//! Exposes relay metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

use crate::relay::Operation;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "relay_requests_total",
        "Relay requests by operation and outcome"
    );
    metrics::describe_histogram!(
        "relay_request_duration_seconds",
        "Duration of upstream round trips in seconds"
    );
    metrics::describe_counter!(
        "relay_upstream_responses_total",
        "Upstream HTTP responses by status code"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a relay round trip
pub fn record_request(operation: Operation, outcome: &str, duration_secs: f64) {
    record_outcome(operation, outcome);
    metrics::histogram!("relay_request_duration_seconds", "operation" => operation.label())
        .record(duration_secs);
}

/// Count a request outcome without a duration (e.g. rejected input)
pub fn record_outcome(operation: Operation, outcome: &str) {
    metrics::counter!(
        "relay_requests_total",
        "operation" => operation.label(),
        "outcome" => outcome.to_string()
    )
    .increment(1);
}

/// Count an upstream HTTP status
pub fn record_upstream_status(status: u16) {
    metrics::counter!("relay_upstream_responses_total", "status" => status.to_string())
        .increment(1);
}

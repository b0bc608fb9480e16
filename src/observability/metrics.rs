//! Metrics collection and exposition.
//!
//! # Metrics
//! - `opgl_http_requests_total` (counter): inbound requests by method, status
//! - `opgl_http_request_duration_seconds` (histogram): inbound latency
//! - `opgl_upstream_requests_total` (counter): Riot API calls by endpoint, outcome
//! - `opgl_upstream_request_duration_seconds` (histogram): Riot API latency
//! - `opgl_match_details_dropped_total` (counter): matches omitted from history, by error kind
//!
//! Recording is a no-op until `init_metrics` installs the Prometheus recorder.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    let method = method.to_string();
    let status = status.to_string();
    counter!("opgl_http_requests_total", "method" => method.clone(), "status" => status.clone()).increment(1);
    histogram!("opgl_http_request_duration_seconds", "method" => method, "status" => status)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_upstream_call(endpoint: &'static str, outcome: &'static str, start: Instant) {
    counter!("opgl_upstream_requests_total", "endpoint" => endpoint, "outcome" => outcome).increment(1);
    histogram!("opgl_upstream_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_match_dropped(kind: &'static str) {
    counter!("opgl_match_details_dropped_total", "kind" => kind).increment(1);
}

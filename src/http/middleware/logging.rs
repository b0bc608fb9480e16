//! Access log and request metrics.

use std::time::Instant;

use axum::{extract::Request, http::header::USER_AGENT, middleware::Next, response::Response};

use crate::http::request::request_id_of;
use crate::observability::metrics;

/// Log one line per request and record request metrics.
pub async fn access_log(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request_id_of(&request).to_string();
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let response = next.run(request).await;
    let status = response.status().as_u16();

    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status,
        duration_ms = start.elapsed().as_millis() as u64,
        user_agent = %user_agent,
        "Request completed"
    );
    metrics::record_request(method.as_str(), status, start);

    response
}

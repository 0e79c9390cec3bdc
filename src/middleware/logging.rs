//! Logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{debug, info, warn};

/// Route probed by load balancers; logged at debug level only
const HEALTH_ROUTE: &str = "/api/v1/health";

/// Request logging middleware.
///
/// Logs the matched route template (`/api/v1/rounds/{id}/distribute`) when
/// available so log lines group by endpoint rather than by id.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if status.is_server_error() {
        warn!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed with server error"
        );
    } else if status == StatusCode::CONFLICT {
        info!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request rejected by state conflict"
        );
    } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
        warn!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed with client error"
        );
    } else if route == HEALTH_ROUTE {
        debug!(status = status.as_u16(), "Health probe");
    } else {
        info!(
            method = %method,
            route = %route,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    }

    response
}

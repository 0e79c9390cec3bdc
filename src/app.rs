//! Router assembly
//!
//! Shared by the binary and the integration tests so both exercise the
//! same middleware stack.

use std::time::Duration;

use axum::{Router, http::StatusCode, middleware};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{handlers, middleware::logging_middleware, state::AppState};

/// Build the application router with every API route under `/api/v1`
pub fn build_router(state: AppState) -> Router {
    let server = &state.config().server;
    let timeout = Duration::from_secs(server.request_timeout_seconds);
    let max_body_bytes = server.max_body_bytes;

    Router::new()
        .nest("/api/v1", handlers::routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(timeout_layer(timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Requests running past `timeout` are answered with 408
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

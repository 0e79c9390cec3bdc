//! Scoring ledger handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Score routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::submit_score))
        .route("/heats/{heat_id}", get(handler::list_heat_scores))
}

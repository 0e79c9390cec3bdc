//! Participant statistics handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Statistics routes (`/participants`)
pub fn routes() -> Router<AppState> {
    Router::new().route("/{id}/stats", get(handler::get_participant_stats))
}

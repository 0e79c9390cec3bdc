//! Heat detail, lifecycle and results handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

/// Heat routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(handler::get_heat))
        .route("/{id}/status", patch(handler::update_heat_status))
        .route("/{id}/results", get(handler::get_heat_results))
}

//! Participant handlers, nested under a competition

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

/// Participant routes (`/competitions/{id}/participants`)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_participants).post(handler::create_participant),
        )
        .route("/{participant_id}", patch(handler::update_participant))
}

//! Round, distribution and manual heat handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Round routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_rounds).post(handler::create_round))
        .route("/{id}", get(handler::get_round))
        // Allocation
        .route("/{id}/distribute", post(handler::distribute_heats))
        .route(
            "/{id}/heats",
            get(handler::list_heats).post(handler::create_manual_heat),
        )
        .route(
            "/{id}/heats/{heat_id}",
            put(handler::update_manual_heat).delete(handler::delete_heat),
        )
}

//! Competition and category handlers

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

/// Competition routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_competitions).post(handler::create_competition))
        .route("/{id}", get(handler::get_competition))
        .route("/{id}/categories", post(handler::create_category))
        .nest("/{id}/participants", super::participants::routes())
}

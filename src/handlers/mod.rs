//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod competitions;
pub mod health;
pub mod heats;
pub mod participants;
pub mod rounds;
pub mod scores;
pub mod stats;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/competitions", competitions::routes())
        .nest("/rounds", rounds::routes())
        .nest("/heats", heats::routes())
        .nest("/scores", scores::routes())
        .nest("/participants", stats::routes())
        .nest("/users", users::routes())
}

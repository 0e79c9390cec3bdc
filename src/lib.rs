//! Heatboard - Dance Competition Heat Allocation and Scoring
//!
//! This library provides the core of the Heatboard judging backend:
//! splitting a category's participants into heats, driving each heat
//! through its lifecycle, and recording judges' scores.
//!
//! # Features
//!
//! - Deterministic automatic heat distribution with optional couple pairing
//! - Manual heat composition with per-round serialization
//! - Forward-only heat lifecycle (`waiting -> in_progress -> finished`)
//! - Last-write-wins score ledger with per-criterion scales
//! - Participant statistics and ranked heat results
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Allocation**: Storage-free heat partitioning
//! - **Repositories**: Database access
//! - **Models**: Domain models

pub mod allocation;
pub mod app;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use app::build_router;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

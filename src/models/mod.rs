//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod competition;
pub mod heat;
pub mod participant;
pub mod round;
pub mod score;
pub mod user;

pub use competition::*;
pub use heat::*;
pub use participant::*;
pub use round::*;
pub use score::*;
pub use user::*;

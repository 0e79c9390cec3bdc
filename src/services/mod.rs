//! Business logic services

pub mod competition_service;
pub mod heat_service;
pub mod lifecycle_service;
pub mod participant_service;
pub mod round_service;
pub mod score_service;
pub mod stats_service;
pub mod user_service;

pub use competition_service::CompetitionService;
pub use heat_service::HeatService;
pub use lifecycle_service::LifecycleService;
pub use participant_service::ParticipantService;
pub use round_service::RoundService;
pub use score_service::ScoreService;
pub use stats_service::StatsService;
pub use user_service::UserService;

//! Database repositories
//!
//! Repositories handle all direct database interactions. Functions that
//! take a `&mut PgConnection` are meant to run inside a caller-owned
//! transaction.

pub mod competition_repo;
pub mod heat_repo;
pub mod participant_repo;
pub mod round_repo;
pub mod score_repo;
pub mod user_repo;

pub use competition_repo::CompetitionRepository;
pub use heat_repo::HeatRepository;
pub use participant_repo::ParticipantRepository;
pub use round_repo::RoundRepository;
pub use score_repo::ScoreRepository;
pub use user_repo::UserRepository;

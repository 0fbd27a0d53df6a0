pub mod listing_repo;
pub mod score_repo;

pub use listing_repo::ListingRepository;
pub use score_repo::{ScoreRepository, ScoreStatsRow};

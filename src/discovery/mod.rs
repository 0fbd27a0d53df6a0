pub mod dto;
pub mod service;

pub use dto::{
    AiReviewEntry, HallFacilities, KeywordHit, ScoreEntry, VenueDetail, VenueRecord, VenueSummary,
};
pub use service::{DiscoveryError, DiscoveryService, SUMMARY_IMAGE_LIMIT};

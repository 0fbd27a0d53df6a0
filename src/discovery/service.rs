use std::sync::Arc;

use log::debug;
use sea_orm::{DatabaseConnection, DbErr};
use thiserror::Error;

use crate::discovery::dto::{
    AiReviewEntry, KeywordHit, ScoreEntry, VenueDetail, VenueRecord, VenueSummary,
};
use crate::pricing;
use crate::scoring::ScoreAggregator;
use crate::search::filter::{HallSearchFilter, Page};
use crate::search::tags;
use crate::storage::repository::{ListingRepository, ScoreRepository};

/// Summaries carry at most this many images.
pub const SUMMARY_IMAGE_LIMIT: u64 = 6;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Listing missing, soft-deleted, or without a live hall.
    #[error("listing {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Db(#[from] DbErr),
}

/// Read-side orchestration over the filter builder, price calculator and
/// score aggregator. Stateless; every call borrows from the injected pool.
pub struct DiscoveryService {
    db: Arc<DatabaseConnection>,
}

impl DiscoveryService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Filtered search returning card summaries with up to
    /// [`SUMMARY_IMAGE_LIMIT`] live images each.
    pub async fn search(
        &self,
        filter: &HallSearchFilter,
        page: Page,
    ) -> Result<Vec<VenueSummary>, DiscoveryError> {
        let listings = ListingRepository::search(&self.db, filter, page).await?;
        debug!("search matched {} listings", listings.len());

        let mut summaries = Vec::with_capacity(listings.len());
        for model in listings {
            let images =
                ListingRepository::image_urls_of(&self.db, model.id, SUMMARY_IMAGE_LIMIT).await?;
            summaries.push(VenueSummary::from_listing(model, images));
        }
        Ok(summaries)
    }

    /// Total matches for the same filter, unpaginated.
    pub async fn count(&self, filter: &HallSearchFilter) -> Result<u64, DiscoveryError> {
        Ok(ListingRepository::count(&self.db, filter).await?)
    }

    pub async fn search_by_keyword(
        &self,
        keyword: &str,
        page: Page,
    ) -> Result<Vec<KeywordHit>, DiscoveryError> {
        let listings = ListingRepository::search_by_keyword(&self.db, keyword, page).await?;
        Ok(listings.into_iter().map(KeywordHit::from).collect())
    }

    /// Full detail view. Fails closed with `NotFound` when the listing is
    /// missing, soft-deleted, or has no live hall; everything else computes
    /// to zero/empty defaults.
    pub async fn detail(&self, listing_id: i64) -> Result<VenueDetail, DiscoveryError> {
        let listing = ListingRepository::find_active(&self.db, listing_id)
            .await?
            .ok_or(DiscoveryError::NotFound(listing_id))?;
        let hall = ListingRepository::hall_of(&self.db, listing_id)
            .await?
            .ok_or(DiscoveryError::NotFound(listing_id))?;

        let venues = ListingRepository::venues_of(&self.db, hall.id).await?;
        let (min_price, max_price) = pricing::listing_price_range(&venues);
        let reviews = ListingRepository::reviews_of(&self.db, listing_id).await?;
        let scores = ScoreRepository::scores_of(&self.db, listing_id).await?;
        let score_summary = ScoreAggregator::compare(&self.db, listing_id).await?;

        Ok(VenueDetail {
            id: listing.id,
            name: listing.name,
            hashtags: tags::decode(&listing.hashtag),
            subway_line: listing.subway_line,
            subway_name: listing.subway_name,
            way_text: listing.way_text,
            park_limit: listing.park_limit,
            park_free_hours: listing.park_free_hours,
            sido: listing.sido,
            gugun: listing.gugun,
            dong: listing.dong,
            address: listing.address,
            has_single_hall: venues.len() == 1,
            min_price,
            max_price,
            hall: hall.into(),
            venues: venues.into_iter().map(VenueRecord::from).collect(),
            ai_reviews: reviews.into_iter().map(AiReviewEntry::from).collect(),
            scores: scores.into_iter().map(ScoreEntry::from).collect(),
            score_summary,
        })
    }
}

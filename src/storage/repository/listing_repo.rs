use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::search::filter::{HallSearchFilter, Page};
use crate::storage::entity::{
    ai_review, hall, listing, listing_image, venue, AiReview, Hall, Listing, ListingImage, Venue,
};

pub struct ListingRepository;

impl ListingRepository {
    /// Filtered search, deduplicated by listing id, id-ascending.
    pub async fn search(
        db: &DatabaseConnection,
        filter: &HallSearchFilter,
        page: Page,
    ) -> Result<Vec<listing::Model>, DbErr> {
        filter
            .to_query()
            .distinct()
            .order_by_asc(listing::Column::Id)
            .offset(page.offset)
            .limit(page.clamped_limit())
            .all(db)
            .await
    }

    /// Cardinality of the unpaginated result set for the same filter. Shares
    /// the query plan with `search`, so UI pagers never drift from the rows
    /// they page over.
    pub async fn count(db: &DatabaseConnection, filter: &HallSearchFilter) -> Result<u64, DbErr> {
        let count: Option<i64> = filter
            .to_query()
            .select_only()
            .column_as(Expr::cust("COUNT(DISTINCT listings.id)"), "count")
            .into_tuple()
            .one(db)
            .await?;
        Ok(count.unwrap_or(0).max(0) as u64)
    }

    /// Keyword search over listing name OR venue name. Venues are
    /// left-joined so a venue-less listing still matches on its own name;
    /// deleted venues never contribute a match.
    pub async fn search_by_keyword(
        db: &DatabaseConnection,
        keyword: &str,
        page: Page,
    ) -> Result<Vec<listing::Model>, DbErr> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            debug!("empty keyword, skipping search");
            return Ok(Vec::new());
        }

        Listing::find()
            .join(JoinType::InnerJoin, listing::Relation::Hall.def())
            .join(JoinType::LeftJoin, hall::Relation::Venue.def())
            .filter(listing::Column::IsDeleted.eq(false))
            .filter(listing::Column::Available.eq(true))
            .filter(hall::Column::IsDeleted.eq(false))
            .filter(
                Condition::any()
                    .add(listing::Column::Name.contains(keyword))
                    .add(
                        Condition::all()
                            .add(venue::Column::Name.contains(keyword))
                            .add(venue::Column::IsDeleted.eq(false)),
                    ),
            )
            .distinct()
            .order_by_asc(listing::Column::Id)
            .offset(page.offset)
            .limit(page.clamped_limit())
            .all(db)
            .await
    }

    /// The listing if it exists and is not soft-deleted.
    pub async fn find_active(
        db: &DatabaseConnection,
        id: i64,
    ) -> Result<Option<listing::Model>, DbErr> {
        Listing::find_by_id(id)
            .filter(listing::Column::IsDeleted.eq(false))
            .one(db)
            .await
    }

    pub async fn hall_of(
        db: &DatabaseConnection,
        listing_id: i64,
    ) -> Result<Option<hall::Model>, DbErr> {
        Hall::find()
            .filter(hall::Column::ListingId.eq(listing_id))
            .filter(hall::Column::IsDeleted.eq(false))
            .one(db)
            .await
    }

    pub async fn venues_of(
        db: &DatabaseConnection,
        hall_id: i64,
    ) -> Result<Vec<venue::Model>, DbErr> {
        Venue::find()
            .filter(venue::Column::HallId.eq(hall_id))
            .filter(venue::Column::IsDeleted.eq(false))
            .order_by_asc(venue::Column::Id)
            .all(db)
            .await
    }

    /// Up to `limit` live image URLs in display order.
    pub async fn image_urls_of(
        db: &DatabaseConnection,
        listing_id: i64,
        limit: u64,
    ) -> Result<Vec<String>, DbErr> {
        ListingImage::find()
            .select_only()
            .column(listing_image::Column::ImageUrl)
            .filter(listing_image::Column::ListingId.eq(listing_id))
            .filter(listing_image::Column::IsDeleted.eq(false))
            .order_by_asc(listing_image::Column::SortOrder)
            .limit(limit)
            .into_tuple()
            .all(db)
            .await
    }

    pub async fn reviews_of(
        db: &DatabaseConnection,
        listing_id: i64,
    ) -> Result<Vec<ai_review::Model>, DbErr> {
        AiReview::find()
            .filter(ai_review::Column::ListingId.eq(listing_id))
            .filter(ai_review::Column::IsDeleted.eq(false))
            .order_by_asc(ai_review::Column::Id)
            .all(db)
            .await
    }
}

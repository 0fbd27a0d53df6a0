use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
};

use crate::storage::entity::{listing, score, Score};

/// One aggregate row per score dimension, straight from GROUP BY.
#[derive(Debug, Clone, FromQueryResult)]
pub struct ScoreStatsRow {
    pub score_type: String,
    pub average: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub count: i64,
}

pub struct ScoreRepository;

impl ScoreRepository {
    /// AVG/MIN/MAX/COUNT per score type. Scores of soft-deleted listings are
    /// excluded along with soft-deleted score rows.
    fn aggregate_query() -> Select<Score> {
        Score::find()
            .join(JoinType::InnerJoin, score::Relation::Listing.def())
            .select_only()
            .column(score::Column::ScoreType)
            .column_as(Expr::cust("AVG(value)"), "average")
            .column_as(Expr::cust("MIN(value)"), "min_value")
            .column_as(Expr::cust("MAX(value)"), "max_value")
            .column_as(Expr::cust("COUNT(*)"), "count")
            .filter(score::Column::IsDeleted.eq(false))
            .filter(listing::Column::IsDeleted.eq(false))
            .group_by(score::Column::ScoreType)
    }

    pub async fn statistics_all(db: &DatabaseConnection) -> Result<Vec<ScoreStatsRow>, DbErr> {
        Self::aggregate_query()
            .order_by_asc(score::Column::ScoreType)
            .into_model::<ScoreStatsRow>()
            .all(db)
            .await
    }

    /// `None` when no live score of that type exists yet.
    pub async fn statistics_for(
        db: &DatabaseConnection,
        score_type: &str,
    ) -> Result<Option<ScoreStatsRow>, DbErr> {
        Self::aggregate_query()
            .filter(score::Column::ScoreType.eq(score_type))
            .into_model::<ScoreStatsRow>()
            .one(db)
            .await
    }

    pub async fn scores_of(
        db: &DatabaseConnection,
        listing_id: i64,
    ) -> Result<Vec<score::Model>, DbErr> {
        Score::find()
            .filter(score::Column::ListingId.eq(listing_id))
            .filter(score::Column::IsDeleted.eq(false))
            .order_by_asc(score::Column::ScoreType)
            .all(db)
            .await
    }

    /// Updates the live row for (listing, type) in place, or inserts one.
    pub async fn upsert(
        db: &DatabaseConnection,
        listing_id: i64,
        score_type: &str,
        value: f64,
    ) -> Result<score::Model, DbErr> {
        let now = Utc::now().timestamp();

        let existing = Score::find()
            .filter(score::Column::ListingId.eq(listing_id))
            .filter(score::Column::ScoreType.eq(score_type))
            .filter(score::Column::IsDeleted.eq(false))
            .one(db)
            .await?;

        match existing {
            Some(model) => {
                let mut active: score::ActiveModel = model.into();
                active.value = Set(value);
                active.updated_at = Set(now);
                active.update(db).await
            }
            None => {
                score::ActiveModel {
                    listing_id: Set(listing_id),
                    score_type: Set(score_type.to_string()),
                    value: Set(value),
                    is_deleted: Set(false),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(db)
                .await
            }
        }
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A sellable listing. Search only ever surfaces rows with
/// `is_deleted = false` and `available = true`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Comma-joined hashtags, e.g. "야외웨딩,주차편리".
    pub hashtag: String,
    pub thumbnail_url: String,
    pub enterprise_name: String,
    pub tel: String,

    // location
    pub sido: String,
    pub gugun: String,
    pub dong: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,

    // transit / parking
    #[sea_orm(nullable)]
    pub subway_line: Option<String>,
    #[sea_orm(nullable)]
    pub subway_name: Option<String>,
    #[sea_orm(nullable)]
    pub way_text: Option<String>,
    pub park_limit: i32,
    pub park_free_hours: i32,

    pub available: bool,
    pub is_deleted: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::hall::Entity")]
    Hall,
    #[sea_orm(has_many = "super::listing_image::Entity")]
    ListingImage,
    #[sea_orm(has_many = "super::score::Entity")]
    Score,
    #[sea_orm(has_many = "super::ai_review::Entity")]
    AiReview,
}

impl Related<super::hall::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hall.def()
    }
}

impl Related<super::listing_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListingImage.def()
    }
}

impl Related<super::score::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Score.def()
    }
}

impl Related<super::ai_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AiReview.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

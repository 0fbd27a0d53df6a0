use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Physical-facility record, exactly one per listing.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "halls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub listing_id: i64,
    pub name: String,

    // amenities
    pub elevator_count: i32,
    pub atm_count: i32,
    pub has_family_waiting_room: bool,
    pub has_pyebaek_room: bool,
    pub valet_parking: bool,
    pub dress_room: bool,
    pub smoking_area: bool,
    pub photo_zone: bool,

    pub is_deleted: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::listing::Entity",
        from = "Column::ListingId",
        to = "super::listing::Column::Id"
    )]
    Listing,
    #[sea_orm(has_many = "super::venue::Entity")]
    Venue,
}

impl Related<super::listing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Listing.def()
    }
}

impl Related<super::venue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Venue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

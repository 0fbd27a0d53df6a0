use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One bookable hall configuration. `hall_types` / `hall_styles` are
/// comma-joined tag sets (see `search::tags`); membership tests must be
/// whole-token, never substring.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "venues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub hall_id: i64,
    pub name: String,

    pub wedding_interval: i32,
    pub wedding_times: String,
    pub wedding_type: String, // 동시, 분리
    pub hall_types: String,   // 호텔, 채플, 컨벤션
    pub hall_styles: String,  // 밝음, 어두움

    pub guaranteed_min_count: i32,
    pub min_capacity: i32,
    pub max_capacity: i32,

    pub basic_price: i64,
    pub peak_season_price: i64,

    pub food_menu: String,
    pub food_cost_per_adult: i64,
    pub food_cost_per_child: i64,
    pub banquet_running_time: i32,

    pub is_deleted: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hall::Entity",
        from = "Column::HallId",
        to = "super::hall::Column::Id"
    )]
    Hall,
}

impl Related<super::hall::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hall.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use serde::{Deserialize, Serialize};

use crate::pricing;
use crate::scoring::ScoreSummary;
use crate::search::tags;
use crate::storage::entity::{ai_review, hall, listing, score, venue};

/// Card-style row for filtered search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: i64,
    pub hashtags: Vec<String>,
    pub name: String,
    pub sido: String,
    pub gugun: String,
    pub address: String,
    pub image_urls: Vec<String>,
}

impl VenueSummary {
    pub fn from_listing(model: listing::Model, image_urls: Vec<String>) -> Self {
        Self {
            id: model.id,
            hashtags: tags::decode(&model.hashtag),
            name: model.name,
            sido: model.sido,
            gugun: model.gugun,
            address: model.address,
            image_urls,
        }
    }
}

/// Row for keyword search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordHit {
    pub id: i64,
    pub name: String,
    pub sido: String,
    pub gugun: String,
    pub address: String,
    pub thumbnail_url: String,
    pub subway_line: Option<String>,
    pub subway_name: Option<String>,
}

impl From<listing::Model> for KeywordHit {
    fn from(model: listing::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            sido: model.sido,
            gugun: model.gugun,
            address: model.address,
            thumbnail_url: model.thumbnail_url,
            subway_line: model.subway_line,
            subway_name: model.subway_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HallFacilities {
    pub name: String,
    pub elevator_count: i32,
    pub atm_count: i32,
    pub has_family_waiting_room: bool,
    pub has_pyebaek_room: bool,
    pub valet_parking: bool,
    pub dress_room: bool,
    pub smoking_area: bool,
    pub photo_zone: bool,
}

impl From<hall::Model> for HallFacilities {
    fn from(model: hall::Model) -> Self {
        Self {
            name: model.name,
            elevator_count: model.elevator_count,
            atm_count: model.atm_count,
            has_family_waiting_room: model.has_family_waiting_room,
            has_pyebaek_room: model.has_pyebaek_room,
            valet_parking: model.valet_parking,
            dress_room: model.dress_room,
            smoking_area: model.smoking_area,
            photo_zone: model.photo_zone,
        }
    }
}

/// One bookable configuration in a detail view, tag sets decoded and the
/// per-venue price range precomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueRecord {
    pub id: i64,
    pub name: String,
    pub wedding_interval: i32,
    pub wedding_times: String,
    pub wedding_type: String,
    pub hall_types: Vec<String>,
    pub hall_styles: Vec<String>,
    pub guaranteed_min_count: i32,
    pub min_capacity: i32,
    pub max_capacity: i32,
    pub basic_price: i64,
    pub peak_season_price: i64,
    pub food_menu: String,
    pub food_cost_per_adult: i64,
    pub food_cost_per_child: i64,
    pub banquet_running_time: i32,
    pub min_total_price: i64,
    pub max_total_price: i64,
}

impl From<venue::Model> for VenueRecord {
    fn from(model: venue::Model) -> Self {
        let (min_total_price, max_total_price) = pricing::venue_price_range(&model);
        Self {
            id: model.id,
            name: model.name,
            wedding_interval: model.wedding_interval,
            wedding_times: model.wedding_times,
            wedding_type: model.wedding_type,
            hall_types: tags::decode(&model.hall_types),
            hall_styles: tags::decode(&model.hall_styles),
            guaranteed_min_count: model.guaranteed_min_count,
            min_capacity: model.min_capacity,
            max_capacity: model.max_capacity,
            basic_price: model.basic_price,
            peak_season_price: model.peak_season_price,
            food_menu: model.food_menu,
            food_cost_per_adult: model.food_cost_per_adult,
            food_cost_per_child: model.food_cost_per_child,
            banquet_running_time: model.banquet_running_time,
            min_total_price,
            max_total_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiReviewEntry {
    pub review_type: String,
    pub content: String,
}

impl From<ai_review::Model> for AiReviewEntry {
    fn from(model: ai_review::Model) -> Self {
        Self {
            review_type: model.review_type,
            content: format_review_content(&model.content),
        }
    }
}

/// Review content is stored pipe-delimited; render one bullet per segment.
pub(crate) fn format_review_content(raw: &str) -> String {
    raw.split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| format!("- {segment}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score_type: String,
    pub value: f64,
}

impl From<score::Model> for ScoreEntry {
    fn from(model: score::Model) -> Self {
        Self {
            score_type: model.score_type,
            value: model.value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueDetail {
    pub id: i64,
    pub name: String,
    pub hashtags: Vec<String>,

    // transit / parking
    pub subway_line: Option<String>,
    pub subway_name: Option<String>,
    pub way_text: Option<String>,
    pub park_limit: i32,
    pub park_free_hours: i32,

    // location
    pub sido: String,
    pub gugun: String,
    pub dong: String,
    pub address: String,

    pub has_single_hall: bool,
    pub min_price: i64,
    pub max_price: i64,

    pub hall: HallFacilities,
    pub venues: Vec<VenueRecord>,
    pub ai_reviews: Vec<AiReviewEntry>,
    pub scores: Vec<ScoreEntry>,
    pub score_summary: ScoreSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_content_becomes_bullets() {
        assert_eq!(
            format_review_content("주차가 편하다|식사가 맛있다 | 역이 가깝다"),
            "- 주차가 편하다\n- 식사가 맛있다\n- 역이 가깝다"
        );
        assert_eq!(format_review_content(""), "");
        assert_eq!(format_review_content("||"), "");
        assert_eq!(format_review_content("한 줄"), "- 한 줄");
    }
}

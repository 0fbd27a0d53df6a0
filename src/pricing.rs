use crate::storage::entity::venue;

/// Effective booking cost range for one venue: the base (or peak-season)
/// venue price plus the guaranteed minimum headcount served at the adult
/// menu price.
pub fn venue_price_range(venue: &venue::Model) -> (i64, i64) {
    let food = venue.guaranteed_min_count as i64 * venue.food_cost_per_adult;
    (
        venue.basic_price + food,
        venue.peak_season_price + food,
    )
}

/// Listing-level range across venues: the cheapest possible booking to the
/// most expensive one. A listing with zero venues reports an explicit zero
/// range rather than folding over nothing.
pub fn listing_price_range(venues: &[venue::Model]) -> (i64, i64) {
    if venues.is_empty() {
        return (0, 0);
    }

    let mut min_total = i64::MAX;
    let mut max_total = i64::MIN;
    for venue in venues {
        let (low, high) = venue_price_range(venue);
        min_total = min_total.min(low);
        max_total = max_total.max(high);
    }
    (min_total, max_total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(basic: i64, peak: i64, guaranteed: i32, adult_food: i64) -> venue::Model {
        venue::Model {
            id: 0,
            hall_id: 0,
            name: "그랜드홀".to_string(),
            wedding_interval: 60,
            wedding_times: "11:00,13:00".to_string(),
            wedding_type: "동시".to_string(),
            hall_types: "호텔".to_string(),
            hall_styles: "밝음".to_string(),
            guaranteed_min_count: guaranteed,
            min_capacity: 0,
            max_capacity: 0,
            basic_price: basic,
            peak_season_price: peak,
            food_menu: "뷔페".to_string(),
            food_cost_per_adult: adult_food,
            food_cost_per_child: 0,
            banquet_running_time: 120,
            is_deleted: false,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn venue_range_adds_guaranteed_food_cost() {
        let v = venue(5_000_000, 6_000_000, 100, 100_000);
        assert_eq!(venue_price_range(&v), (15_000_000, 16_000_000));
    }

    #[test]
    fn listing_range_spans_all_venues() {
        let venues = vec![
            venue(5_000_000, 6_000_000, 100, 100_000), // 15M ~ 16M
            venue(3_000_000, 9_000_000, 200, 50_000),  // 13M ~ 19M
        ];
        assert_eq!(listing_price_range(&venues), (13_000_000, 19_000_000));
    }

    #[test]
    fn zero_venues_report_zero_range() {
        assert_eq!(listing_price_range(&[]), (0, 0));
    }

    #[test]
    fn zero_headcount_leaves_bare_prices() {
        let v = venue(1_000_000, 2_000_000, 0, 100_000);
        assert_eq!(venue_price_range(&v), (1_000_000, 2_000_000));
    }
}

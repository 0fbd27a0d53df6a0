use sea_orm::{
    ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait, Select,
};

use crate::search::{guest_count, tags};
use crate::storage::entity::{hall, listing, venue, Listing};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Offset/limit pagination. The limit is clamped defensively at query time;
/// rejecting out-of-range values outright is the caller's job.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Page {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    pub fn clamped_limit(&self) -> u64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }
}

/// One search request: every option is independently optional, values within
/// an option are OR-combined, options are AND-combined. An empty filter
/// matches every searchable venue.
#[derive(Debug, Clone, Default)]
pub struct HallSearchFilter {
    /// Substring match against the listing city (시도).
    pub sidos: Vec<String>,
    /// Substring match against the listing district (구군).
    pub guguns: Vec<String>,
    /// Guest-count bucket tokens, e.g. "100~150명" (see `search::guest_count`).
    pub guest_counts: Vec<String>,
    /// Exact wedding type, e.g. 동시 / 분리.
    pub wedding_types: Vec<String>,
    /// Exact food menu match.
    pub food_menus: Vec<String>,
    /// Whole-token hall type tags (see `search::tags`).
    pub hall_types: Vec<String>,
    /// Whole-token hall style tags.
    pub hall_styles: Vec<String>,
}

impl HallSearchFilter {
    fn has_venue_filter(&self) -> bool {
        !self.guest_counts.is_empty()
            || !self.wedding_types.is_empty()
            || !self.food_menus.is_empty()
            || !self.hall_types.is_empty()
            || !self.hall_styles.is_empty()
    }

    /// Builds the query plan: searchable listings joined to their hall, the
    /// venue join added only when a venue-level option asks for it, and the
    /// per-option condition trees folded in with AND. No ordering, dedup or
    /// pagination here; `search` and `count` share this plan so their
    /// cardinalities cannot drift apart.
    pub fn to_query(&self) -> Select<Listing> {
        let mut query = searchable();

        if let Some(cond) = substring_any(listing::Column::Sido, &self.sidos) {
            query = query.filter(cond);
        }
        if let Some(cond) = substring_any(listing::Column::Gugun, &self.guguns) {
            query = query.filter(cond);
        }

        if self.has_venue_filter() {
            query = query
                .join(JoinType::InnerJoin, hall::Relation::Venue.def())
                .filter(venue::Column::IsDeleted.eq(false));

            if let Some(cond) = guest_count_any(&self.guest_counts) {
                query = query.filter(cond);
            }
            if !self.wedding_types.is_empty() {
                query = query.filter(venue::Column::WeddingType.is_in(self.wedding_types.clone()));
            }
            if !self.food_menus.is_empty() {
                query = query.filter(venue::Column::FoodMenu.is_in(self.food_menus.clone()));
            }
            if let Some(cond) = tag_set_any(venue::Column::HallTypes, &self.hall_types) {
                query = query.filter(cond);
            }
            if let Some(cond) = tag_set_any(venue::Column::HallStyles, &self.hall_styles) {
                query = query.filter(cond);
            }
        }

        query
    }
}

/// Base plan for anything surfaced by search: listing not deleted and
/// available, owning hall not deleted.
fn searchable() -> Select<Listing> {
    Listing::find()
        .join(JoinType::InnerJoin, listing::Relation::Hall.def())
        .filter(listing::Column::IsDeleted.eq(false))
        .filter(listing::Column::Available.eq(true))
        .filter(hall::Column::IsDeleted.eq(false))
}

fn substring_any(col: listing::Column, needles: &[String]) -> Option<Condition> {
    let needles: Vec<&str> = needles
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if needles.is_empty() {
        return None;
    }
    Some(
        needles
            .into_iter()
            .fold(Condition::any(), |cond, s| cond.add(col.contains(s))),
    )
}

/// OR over the parsed buckets, each an inclusive interval on the guaranteed
/// minimum headcount. Buckets that parse as unbounded contribute nothing; if
/// every bucket was malformed the whole option is a no-op.
fn guest_count_any(buckets: &[String]) -> Option<Condition> {
    let ranges: Vec<_> = buckets
        .iter()
        .map(|b| guest_count::parse(b))
        .filter(|r| !r.is_unbounded())
        .collect();
    if ranges.is_empty() {
        return None;
    }

    let col = venue::Column::GuaranteedMinCount;
    let cond = ranges
        .into_iter()
        .fold(Condition::any(), |cond, range| match (range.min, range.max) {
            (Some(lo), Some(hi)) => cond.add(Condition::all().add(col.gte(lo)).add(col.lte(hi))),
            (Some(lo), None) => cond.add(col.gte(lo)),
            (None, Some(hi)) => cond.add(col.lte(hi)),
            (None, None) => unreachable!("unbounded ranges filtered above"),
        });
    Some(cond)
}

fn tag_set_any(col: venue::Column, wanted: &[String]) -> Option<Condition> {
    let wanted: Vec<&str> = wanted
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if wanted.is_empty() {
        return None;
    }
    Some(
        wanted
            .into_iter()
            .fold(Condition::any(), |cond, tag| cond.add(tags::sql_matches(col, tag))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    fn sql(filter: &HallSearchFilter) -> String {
        filter.to_query().build(DbBackend::Sqlite).to_string()
    }

    #[test]
    fn empty_filter_still_restricts_to_searchable() {
        let sql = sql(&HallSearchFilter::default());
        assert!(sql.contains("INNER JOIN \"halls\""));
        assert!(sql.contains("\"listings\".\"is_deleted\""));
        assert!(sql.contains("\"listings\".\"available\""));
        assert!(sql.contains("\"halls\".\"is_deleted\""));
        // no venue filter requested, so no venue join
        assert!(!sql.contains("\"venues\""));
    }

    #[test]
    fn venue_join_only_when_needed() {
        let filter = HallSearchFilter {
            wedding_types: vec!["동시".into()],
            ..Default::default()
        };
        let sql = sql(&filter);
        assert!(sql.contains("INNER JOIN \"venues\""));
        assert!(sql.contains("\"venues\".\"is_deleted\""));
        assert!(sql.contains("\"venues\".\"wedding_type\" IN ('동시')"));
    }

    #[test]
    fn location_options_are_substring_or_combined() {
        let filter = HallSearchFilter {
            sidos: vec!["서울".into(), "경기".into()],
            ..Default::default()
        };
        let sql = sql(&filter);
        assert!(sql.contains("\"listings\".\"sido\" LIKE '%서울%'"));
        assert!(sql.contains("OR \"listings\".\"sido\" LIKE '%경기%'"));
    }

    #[test]
    fn guest_count_buckets_become_interval_disjunction() {
        let filter = HallSearchFilter {
            guest_counts: vec!["100~150".into(), "300명이상".into(), "쓰레기".into()],
            ..Default::default()
        };
        let sql = sql(&filter);
        assert!(sql.contains("\"venues\".\"guaranteed_min_count\" >= 100"));
        assert!(sql.contains("\"venues\".\"guaranteed_min_count\" <= 150"));
        assert!(sql.contains("\"venues\".\"guaranteed_min_count\" >= 300"));
    }

    #[test]
    fn all_malformed_buckets_are_a_noop() {
        let filter = HallSearchFilter {
            guest_counts: vec!["쓰레기".into(), "".into()],
            ..Default::default()
        };
        // the option still forces the venue join but adds no headcount
        // predicate
        let sql = sql(&filter);
        assert!(sql.contains("INNER JOIN \"venues\""));
        assert!(!sql.contains("guaranteed_min_count"));
    }

    #[test]
    fn tag_options_generate_whole_token_patterns() {
        let filter = HallSearchFilter {
            hall_types: vec!["호텔".into()],
            ..Default::default()
        };
        let sql = sql(&filter);
        assert!(sql.contains("\"venues\".\"hall_types\" = '호텔'"));
        assert!(sql.contains("LIKE '호텔,%'"));
        assert!(sql.contains("LIKE '%,호텔,%'"));
        assert!(sql.contains("LIKE '%,호텔'"));
        // never a bare substring pattern that would match 호텔 inside
        // another token
        assert!(!sql.contains("LIKE '%호텔%'"));
    }

    #[test]
    fn limit_is_clamped_into_range() {
        assert_eq!(Page::new(0, 0).clamped_limit(), 1);
        assert_eq!(Page::new(0, 10).clamped_limit(), 10);
        assert_eq!(Page::new(0, 100).clamped_limit(), 100);
        assert_eq!(Page::new(0, 5_000).clamped_limit(), MAX_PAGE_SIZE);
        assert_eq!(Page::default().limit, DEFAULT_PAGE_SIZE);
    }
}

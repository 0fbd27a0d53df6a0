use std::collections::BTreeMap;

use sea_orm::{DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};

use crate::storage::repository::score_repo::{ScoreRepository, ScoreStatsRow};

/// Rounds to one decimal place, halves away from zero (`f64::round`
/// semantics): 0.25 → 0.3, -0.25 → -0.3.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Global statistics for one score dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreStatistics {
    pub score_type: String,
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub count: i64,
}

impl From<ScoreStatsRow> for ScoreStatistics {
    fn from(row: ScoreStatsRow) -> Self {
        Self {
            score_type: row.score_type,
            average: round1(row.average),
            min: row.min_value,
            max: row.max_value,
            count: row.count,
        }
    }
}

/// One listing's score on a dimension against the global average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComparison {
    pub score_type: String,
    pub venue_score: f64,
    pub average: f64,
    /// Positive above the average, negative below.
    pub difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub overall_score: f64,
    pub overall_average: f64,
    pub comparisons: Vec<ScoreComparison>,
}

/// Builds the per-dimension comparison of one listing against the global
/// statistics.
///
/// Every dimension with any global statistics appears in `comparisons`; a
/// listing with no row for a dimension reports a zero score there, so its
/// difference is `0 - average`. `overall_score`, in contrast, averages only
/// the dimensions the listing actually has; missing dimensions are excluded
/// from it, not zero-filled. The asymmetry is intentional and pinned by
/// tests on both sides.
pub fn build_summary(stats: &[ScoreStatsRow], own: &BTreeMap<String, f64>) -> ScoreSummary {
    let comparisons: Vec<ScoreComparison> = stats
        .iter()
        .map(|s| {
            let venue_score = own.get(&s.score_type).copied().unwrap_or(0.0);
            let average = round1(s.average);
            ScoreComparison {
                score_type: s.score_type.clone(),
                venue_score,
                average,
                difference: round1(venue_score - average),
            }
        })
        .collect();

    let overall_score = if own.is_empty() {
        0.0
    } else {
        round1(own.values().sum::<f64>() / own.len() as f64)
    };
    let overall_average = if comparisons.is_empty() {
        0.0
    } else {
        round1(comparisons.iter().map(|c| c.average).sum::<f64>() / comparisons.len() as f64)
    };

    ScoreSummary {
        overall_score,
        overall_average,
        comparisons,
    }
}

pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Global statistics for one dimension; zero defaults when no live score
    /// of that type exists yet.
    pub async fn statistics(
        db: &DatabaseConnection,
        score_type: &str,
    ) -> Result<ScoreStatistics, DbErr> {
        let row = ScoreRepository::statistics_for(db, score_type).await?;
        Ok(match row {
            Some(row) => row.into(),
            None => ScoreStatistics {
                score_type: score_type.to_string(),
                average: 0.0,
                min: 0.0,
                max: 0.0,
                count: 0,
            },
        })
    }

    /// Compares one listing's scores against the global per-dimension
    /// averages. Dimensions are ordered by score type.
    pub async fn compare(db: &DatabaseConnection, listing_id: i64) -> Result<ScoreSummary, DbErr> {
        let stats = ScoreRepository::statistics_all(db).await?;
        let own: BTreeMap<String, f64> = ScoreRepository::scores_of(db, listing_id)
            .await?
            .into_iter()
            .map(|s| (s.score_type, s.value))
            .collect();
        Ok(build_summary(&stats, &own))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_row(score_type: &str, average: f64, min: f64, max: f64, count: i64) -> ScoreStatsRow {
        ScoreStatsRow {
            score_type: score_type.to_string(),
            average,
            min_value: min,
            max_value: max,
            count,
        }
    }

    #[test]
    fn round1_is_half_away_from_zero() {
        assert_eq!(round1(7.44), 7.4);
        assert_eq!(round1(7.46), 7.5);
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(8.0), 8.0);
    }

    #[test]
    fn statistics_round_average_only() {
        let stats: ScoreStatistics = stats_row("분위기", 8.04, 7.0, 9.0, 3).into();
        assert_eq!(stats.average, 8.0);
        assert_eq!(stats.min, 7.0);
        assert_eq!(stats.max, 9.0);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn missing_dimension_is_zero_filled_in_comparisons() {
        // listing scored only 위치; 식사 exists globally with average 7.5
        let stats = vec![
            stats_row("식사", 7.5, 7.0, 8.0, 2),
            stats_row("위치", 8.0, 7.0, 9.0, 3),
        ];
        let own = BTreeMap::from([("위치".to_string(), 9.0)]);

        let summary = build_summary(&stats, &own);

        let meal = &summary.comparisons[0];
        assert_eq!(meal.score_type, "식사");
        assert_eq!(meal.venue_score, 0.0);
        assert_eq!(meal.difference, -7.5);

        let location = &summary.comparisons[1];
        assert_eq!(location.venue_score, 9.0);
        assert_eq!(location.difference, 1.0);

        // ...while the overall score averages only the present dimension
        assert_eq!(summary.overall_score, 9.0);
        // overall average spans every dimension's global average
        assert_eq!(summary.overall_average, round1((7.5 + 8.0) / 2.0));
    }

    #[test]
    fn empty_everything_yields_zero_defaults() {
        let summary = build_summary(&[], &BTreeMap::new());
        assert_eq!(summary.overall_score, 0.0);
        assert_eq!(summary.overall_average, 0.0);
        assert!(summary.comparisons.is_empty());
    }

    #[test]
    fn scoreless_listing_zero_fills_every_dimension() {
        let stats = vec![stats_row("위치", 6.0, 5.0, 7.0, 4)];
        let summary = build_summary(&stats, &BTreeMap::new());
        assert_eq!(summary.overall_score, 0.0);
        assert_eq!(summary.comparisons[0].venue_score, 0.0);
        assert_eq!(summary.comparisons[0].difference, -6.0);
    }
}

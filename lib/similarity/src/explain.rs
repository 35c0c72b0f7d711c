//! Presentation of ranking results
//!
//! Shapes a ranking into the response returned to callers: the most and
//! least similar candidates, plus optional statistics and per-field
//! breakdowns showing where the closest matches differ from the query.

use crate::distance::FieldDistance;
use crate::engine::RankingReport;
use crate::rank::Ranking;
use camsim_core::Field;
use serde::Serialize;

/// A candidate with its score and per-field distance from the query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainedResult {
    pub id: String,
    pub score: f64,
    /// Absolute normalized difference of each field
    pub explain: FieldDistance,
}

impl ExplainedResult {
    /// Explain every candidate in the lowest-score group, in catalog order
    pub fn most_similar(report: &RankingReport) -> Vec<Self> {
        let Some(best) = report.ranking.best() else {
            return Vec::new();
        };
        report
            .candidates
            .iter()
            .filter(|scored| scored.score == best.score)
            .map(|scored| Self {
                id: scored.id.clone(),
                score: scored.score,
                explain: scored.distance,
            })
            .collect()
    }
}

/// Response for a similarity comparison
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarResponse {
    pub most_similar_players: Vec<String>,
    pub most_dissimilar_players: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SimilarityStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain: Option<Vec<ExplainedResult>>,
}

impl SimilarResponse {
    pub fn from_ranking(ranking: &Ranking) -> Self {
        Self {
            most_similar_players: ranking.most_similar().to_vec(),
            most_dissimilar_players: ranking.most_dissimilar().to_vec(),
            stats: None,
            explain: None,
        }
    }
}

/// Summary statistics for one ranking pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityStats {
    /// Catalog records considered, valid or not
    pub candidates_count: usize,
    /// Records that passed validation and were ranked
    pub ranked_count: usize,
    /// Records dropped by validation
    pub skipped_count: usize,
    /// Number of distinct scores
    pub groups_count: usize,
    pub best_score: Option<f64>,
    pub worst_score: Option<f64>,
    /// Field contributing the most distance to the first most-similar candidate
    pub top_contributing_field: Option<Field>,
}

impl SimilarityStats {
    pub fn compute(report: &RankingReport) -> Self {
        let ranked_count = report.candidates.len();
        let best = report.ranking.best();

        let top_contributing_field = best.and_then(|entry| {
            report
                .candidates
                .iter()
                .find(|scored| scored.score == entry.score)
                .map(|scored| scored.distance.largest().0)
        });

        Self {
            candidates_count: ranked_count + report.skipped.len(),
            ranked_count,
            skipped_count: report.skipped.len(),
            groups_count: report.ranking.len(),
            best_score: best.map(|e| e.score),
            worst_score: report.ranking.worst().map(|e| e.score),
            top_contributing_field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::group_by_score;

    #[test]
    fn test_response_from_empty_ranking() {
        let response = SimilarResponse::from_ranking(&Ranking::default());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "mostSimilarPlayers": [],
                "mostDissimilarPlayers": []
            })
        );
    }

    #[test]
    fn test_single_group_is_both_most_and_least_similar() {
        let ranking = group_by_score(vec![(0.5, "a".to_string()), (0.5, "b".to_string())]);
        let response = SimilarResponse::from_ranking(&ranking);
        assert_eq!(response.most_similar_players, vec!["a", "b"]);
        assert_eq!(response.most_dissimilar_players, vec!["a", "b"]);
    }

    #[test]
    fn test_stats_for_empty_report() {
        let report = RankingReport {
            ranking: Ranking::default(),
            candidates: Vec::new(),
            skipped: Vec::new(),
        };
        let stats = SimilarityStats::compute(&report);
        assert_eq!(stats.candidates_count, 0);
        assert_eq!(stats.best_score, None);
        assert_eq!(stats.top_contributing_field, None);
        assert!(ExplainedResult::most_similar(&report).is_empty());
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let report = RankingReport {
            ranking: Ranking::default(),
            candidates: Vec::new(),
            skipped: Vec::new(),
        };
        let json = serde_json::to_value(SimilarityStats::compute(&report)).unwrap();
        assert!(json.get("candidatesCount").is_some());
        assert!(json.get("topContributingField").is_some());
    }
}

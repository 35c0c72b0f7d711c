//! Validate, normalize and rank in one pass
//!
//! The engine owns no mutable state. Every call validates its own query and
//! candidate records, so one engine can serve concurrent requests.

use crate::explain::{ExplainedResult, SimilarResponse, SimilarityStats};
use crate::rank::{group_by_score, Ranker, Ranking, ScoredCandidate};
use camsim_core::{BoundsTable, RawCandidate, RawSettings};
use camsim_schema::{NormalizedCameraSettings, Normalizer, Schema, ValidationFailure};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Malformed query: {0}")]
    MalformedQuery(#[from] ValidationFailure),
}

/// A catalog record dropped because it failed validation
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedCandidate {
    pub id: String,
    pub failure: ValidationFailure,
}

/// Catalog records split into rankable and skipped
#[derive(Debug, Clone, Default)]
pub struct PreparedCatalog {
    pub accepted: Vec<(String, NormalizedCameraSettings)>,
    pub skipped: Vec<SkippedCandidate>,
}

/// Result of one ranking pass
#[derive(Debug, Clone)]
pub struct RankingReport {
    pub ranking: Ranking,
    /// Every accepted candidate with its per-field distance, in catalog order
    pub candidates: Vec<ScoredCandidate>,
    pub skipped: Vec<SkippedCandidate>,
}

impl RankingReport {
    pub fn stats(&self) -> SimilarityStats {
        SimilarityStats::compute(self)
    }
}

/// Schema, normalizer and ranker over one bounds table
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    schema: Schema,
    normalizer: Normalizer,
}

impl SimilarityEngine {
    pub fn new(bounds: Arc<BoundsTable>) -> Self {
        Self {
            schema: Schema::new(bounds.clone()),
            normalizer: Normalizer::new(bounds),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn bounds(&self) -> &BoundsTable {
        self.schema.bounds()
    }

    /// Validate and normalize the query; failure here is fatal for the request
    pub fn prepare_query(&self, raw: &RawSettings) -> Result<NormalizedCameraSettings, EngineError> {
        let settings = self.schema.validate(raw)?;
        Ok(self.normalizer.normalize(&settings))
    }

    /// Validate and normalize catalog records, dropping the malformed ones
    pub fn prepare_candidates(&self, records: &[RawCandidate]) -> PreparedCatalog {
        let mut prepared = PreparedCatalog::default();
        for record in records {
            match self.schema.validate(&record.settings) {
                Ok(settings) => prepared
                    .accepted
                    .push((record.id.clone(), self.normalizer.normalize(&settings))),
                Err(failure) => {
                    debug!(candidate = %record.id, error = %failure, "skipping malformed candidate");
                    prepared.skipped.push(SkippedCandidate {
                        id: record.id.clone(),
                        failure,
                    });
                }
            }
        }
        prepared
    }

    /// Rank catalog records against a raw query
    pub fn rank(&self, query: &RawSettings, records: &[RawCandidate]) -> Result<RankingReport, EngineError> {
        let query = self.prepare_query(query)?;
        let prepared = self.prepare_candidates(records);

        let scored = Ranker::new(query).score_all(prepared.accepted);
        let ranking = group_by_score(scored.iter().map(|s| (s.score, s.id.clone())));

        debug!(
            ranked = scored.len(),
            skipped = prepared.skipped.len(),
            groups = ranking.len(),
            "ranked candidates"
        );

        Ok(RankingReport {
            ranking,
            candidates: scored,
            skipped: prepared.skipped,
        })
    }

    /// Rank and shape the result for presentation
    ///
    /// With `explain`, the response also carries statistics and the per-field
    /// distances of the most similar candidates.
    pub fn compare(
        &self,
        query: &RawSettings,
        records: &[RawCandidate],
        explain: bool,
    ) -> Result<SimilarResponse, EngineError> {
        let report = self.rank(query, records)?;
        let mut response = SimilarResponse::from_ranking(&report.ranking);
        if explain {
            response.stats = Some(report.stats());
            response.explain = Some(ExplainedResult::most_similar(&report));
        }
        Ok(response)
    }
}

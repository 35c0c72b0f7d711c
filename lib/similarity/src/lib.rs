//! # camsim Similarity
//!
//! Scores camera settings against a query and ranks them from most to least
//! similar.
//!
//! ## Features
//!
//! - **Distance**: unweighted L1 distance over the nine normalized fields
//! - **Ranking**: candidates grouped by exact score, groups sorted ascending
//! - **Engine**: validation, normalization and ranking in one pass, dropping
//!   malformed catalog records
//! - **Explainability**: per-field breakdown of the closest matches
//!
//! ## Example
//!
//! ```rust
//! use camsim_core::{BoundsTable, RawCandidate};
//! use camsim_similarity::SimilarityEngine;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let engine = SimilarityEngine::new(Arc::new(BoundsTable::bundled().unwrap()));
//! let settings = json!({
//!     "cameraShake": 0, "fov": 110, "height": 90, "angle": -4.0,
//!     "distance": 270, "stiffness": 0.65, "swivelSpeed": 7.5,
//!     "transitionSpeed": 1.7, "ballCamera": 0
//! });
//! let raw = settings.as_object().unwrap().clone();
//! let catalog = vec![RawCandidate::new("0ver Zer0", raw.clone())];
//!
//! let response = engine.compare(&raw, &catalog, false).unwrap();
//! assert_eq!(response.most_similar_players, vec!["0ver Zer0"]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Schema    │────>│ Normalizer  │────>│   Ranker    │
//! │ (validate)  │     │  (→ [0,1])  │     │ (L1, group) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌─────────────┐
//!                                         │  Explain    │
//!                                         │ (response)  │
//!                                         └─────────────┘
//! ```

pub mod distance;
pub mod rank;
pub mod engine;
pub mod explain;

// Re-export main types for convenience
pub use distance::{distance, score, FieldDistance, MAX_SCORE};
pub use rank::{group_by_score, rank, Ranker, Ranking, RankingEntry, ScoredCandidate};
pub use engine::{EngineError, PreparedCatalog, RankingReport, SimilarityEngine, SkippedCandidate};
pub use explain::{ExplainedResult, SimilarResponse, SimilarityStats};

#[cfg(test)]
pub(crate) mod test_support {
    use camsim_core::{Bound, BoundsTable, Field, FIELD_COUNT};
    use camsim_schema::{NormalizedCameraSettings, Normalizer, Schema};
    use serde_json::{Map, Value};
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Every bounded field in `[0, 1]`, so normalization is the identity
    pub fn unit_bounds() -> Arc<BoundsTable> {
        let map: HashMap<String, Bound> = Field::BOUNDED
            .iter()
            .map(|field| (field.name().to_string(), Bound::new(0.0, 1.0)))
            .collect();
        Arc::new(BoundsTable::from_map(&map).unwrap())
    }

    pub fn normalized(values: [f64; FIELD_COUNT]) -> NormalizedCameraSettings {
        let bounds = unit_bounds();
        let raw: Map<String, Value> = Field::ALL
            .iter()
            .map(|field| (field.name().to_string(), Value::from(values[field.index()])))
            .collect();
        let settings = Schema::new(bounds.clone()).validate(&raw).unwrap();
        Normalizer::new(bounds).normalize(&settings)
    }
}

//! # camsim
//!
//! Compare a camera configuration against a catalog of pro player settings
//! and find the most and least similar players.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! camsim --http-port 4321
//! curl 'http://localhost:4321/api/similar-camera-settings?cameraShake=0&fov=110&height=90&angle=-4&distance=270&stiffness=0.65&swivelSpeed=7.5&transitionSpeed=1.7&ballCamera=0'
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use camsim::prelude::*;
//! use std::sync::Arc;
//!
//! let engine = SimilarityEngine::new(Arc::new(BoundsTable::bundled().unwrap()));
//! let catalog = extract_candidates(Snapshot::bundled().unwrap().html()).unwrap();
//!
//! let query = raw_settings_from_pairs([
//!     ("cameraShake", "0"), ("fov", "110"), ("height", "90"),
//!     ("angle", "-4.0"), ("distance", "270"), ("stiffness", "0.65"),
//!     ("swivelSpeed", "7.50"), ("transitionSpeed", "1.70"), ("ballCamera", "0"),
//! ]);
//! let response = engine.compare(&query, &catalog, false).unwrap();
//! assert_eq!(response.most_similar_players, vec!["0ver Zer0"]);
//! ```
//!
//! ## Crate Structure
//!
//! - `camsim-core` - fields, bounds table, raw records
//! - `camsim-schema` - validation and normalization
//! - `camsim-similarity` - distance, ranking, response shaping
//! - `camsim-catalog` - catalog snapshots and HTML table extraction
//! - `camsim-api` - REST API

// Re-export core types
pub use camsim_core::{
    raw_settings_from_pairs, Bound, BoundsTable, Field, FieldKind, FieldVector, RawCandidate,
    RawSettings,
};

pub use camsim_schema::{
    CameraSettings, FieldError, FieldErrorKind, NormalizedCameraSettings, Normalizer, Schema,
    ValidationFailure,
};

pub use camsim_similarity::{
    EngineError, Ranking, RankingEntry, SimilarResponse, SimilarityEngine, SimilarityStats,
};

// Re-export catalog
pub use camsim_catalog::{extract_candidates, CatalogError, CatalogSource, Snapshot};

// Re-export API
pub use camsim_api::{AppState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        raw_settings_from_pairs, BoundsTable, Field, RawCandidate, RawSettings,
        Schema, Normalizer, CameraSettings, NormalizedCameraSettings,
        SimilarityEngine, Ranking, SimilarResponse,
        extract_candidates, CatalogSource, Snapshot,
        AppState, RestApi,
    };
}

//! # camsim Schema
//!
//! Validation and normalization of camera settings.
//!
//! Raw records (from a query string or a scraped catalog row) are validated
//! by [`Schema`] into [`CameraSettings`], then rescaled by [`Normalizer`]
//! into [`NormalizedCameraSettings`], where every field lies in `[0, 1]`.
//!
//! ```rust
//! use camsim_core::{BoundsTable, Field};
//! use camsim_schema::{Normalizer, Schema};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let bounds = Arc::new(BoundsTable::bundled().unwrap());
//! let schema = Schema::new(bounds.clone());
//! let normalizer = Normalizer::new(bounds);
//!
//! let raw = json!({
//!     "cameraShake": 0, "fov": 110, "height": 90, "angle": -4.0,
//!     "distance": 270, "stiffness": 0.65, "swivelSpeed": 7.5,
//!     "transitionSpeed": 1.7, "ballCamera": 0
//! });
//! let settings = schema.validate(raw.as_object().unwrap()).unwrap();
//! let normalized = normalizer.normalize(&settings);
//! assert_eq!(normalized.get(Field::Fov), 1.0);
//! ```

pub mod schema;
pub mod normalize;

pub use schema::{CameraSettings, FieldError, FieldErrorKind, Schema, ValidationFailure};
pub use normalize::{NormalizedCameraSettings, Normalizer};

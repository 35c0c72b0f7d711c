//! Min-max normalization of validated settings
//!
//! Bounded fields are rescaled with the bounds table, not with the range of
//! whatever records happen to be in a request, so the same absolute value
//! always normalizes to the same result.

use crate::schema::CameraSettings;
use camsim_core::{BoundsTable, Field, FieldKind, FieldVector};
use serde::Serialize;
use std::sync::Arc;

/// Camera settings with every field in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedCameraSettings {
    values: FieldVector,
}

impl NormalizedCameraSettings {
    #[inline]
    pub fn get(&self, field: Field) -> f64 {
        self.values.get(field)
    }

    pub fn values(&self) -> &FieldVector {
        &self.values
    }
}

/// Rescales bounded fields to `[0, 1]`; binary fields pass through
#[derive(Debug, Clone)]
pub struct Normalizer {
    bounds: Arc<BoundsTable>,
}

impl Normalizer {
    pub fn new(bounds: Arc<BoundsTable>) -> Self {
        Self { bounds }
    }

    /// Normalize validated settings
    ///
    /// `settings` must have been validated against the same bounds table;
    /// the table guarantees `max > min`, so this never divides by zero.
    pub fn normalize(&self, settings: &CameraSettings) -> NormalizedCameraSettings {
        let values = FieldVector::from_fn(|field| {
            let value = settings.get(field);
            match (field.kind(), self.bounds.get(field)) {
                (FieldKind::Bounded, Some(bound)) => bound.rescale(value),
                _ => value,
            }
        });
        NormalizedCameraSettings { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use camsim_core::{Bound, RawSettings};
    use serde_json::json;
    use std::collections::HashMap;

    fn bounds() -> Arc<BoundsTable> {
        let mut map = HashMap::new();
        map.insert("fov".to_string(), Bound::new(10.0, 110.0));
        map.insert("height".to_string(), Bound::new(40.0, 200.0));
        map.insert("angle".to_string(), Bound::new(-15.0, 0.0));
        map.insert("distance".to_string(), Bound::new(100.0, 400.0));
        map.insert("stiffness".to_string(), Bound::new(0.0, 1.0));
        map.insert("swivelSpeed".to_string(), Bound::new(1.0, 10.0));
        map.insert("transitionSpeed".to_string(), Bound::new(1.0, 2.0));
        Arc::new(BoundsTable::from_map(&map).unwrap())
    }

    fn settings(fov: f64, angle: f64) -> CameraSettings {
        let raw: RawSettings = json!({
            "cameraShake": 1,
            "fov": fov,
            "height": 200,
            "angle": angle,
            "distance": 100,
            "stiffness": 0.5,
            "swivelSpeed": 5.5,
            "transitionSpeed": 1.0,
            "ballCamera": 0
        })
        .as_object()
        .cloned()
        .unwrap();
        Schema::new(bounds()).validate(&raw).unwrap()
    }

    #[test]
    fn test_max_normalizes_to_one() {
        let normalized = Normalizer::new(bounds()).normalize(&settings(110.0, -4.0));
        assert_eq!(normalized.get(Field::Fov), 1.0);
        assert_eq!(normalized.get(Field::Height), 1.0);
    }

    #[test]
    fn test_min_normalizes_to_zero() {
        let normalized = Normalizer::new(bounds()).normalize(&settings(10.0, -15.0));
        assert_eq!(normalized.get(Field::Fov), 0.0);
        assert_eq!(normalized.get(Field::Angle), 0.0);
        assert_eq!(normalized.get(Field::Distance), 0.0);
        assert_eq!(normalized.get(Field::TransitionSpeed), 0.0);
    }

    #[test]
    fn test_interior_values() {
        let normalized = Normalizer::new(bounds()).normalize(&settings(60.0, -7.5));
        assert_eq!(normalized.get(Field::Fov), 0.5);
        assert_eq!(normalized.get(Field::Angle), 0.5);
        assert_eq!(normalized.get(Field::SwivelSpeed), 0.5);
        assert_eq!(normalized.get(Field::Stiffness), 0.5);
    }

    #[test]
    fn test_binary_fields_pass_through() {
        let normalized = Normalizer::new(bounds()).normalize(&settings(60.0, -7.5));
        assert_eq!(normalized.get(Field::CameraShake), 1.0);
        assert_eq!(normalized.get(Field::BallCamera), 0.0);
    }

    #[test]
    fn test_every_field_in_unit_interval() {
        let normalizer = Normalizer::new(bounds());
        for fov in [10.0, 10.1, 33.3, 77.7, 109.9, 110.0] {
            for angle in [-15.0, -14.99, -3.3, 0.0] {
                let normalized = normalizer.normalize(&settings(fov, angle));
                for (field, value) in normalized.values().iter() {
                    assert!((0.0..=1.0).contains(&value), "{} = {}", field, value);
                }
            }
        }
    }

    #[test]
    fn test_monotonic_per_field() {
        let normalizer = Normalizer::new(bounds());
        let fovs = [10.0, 10.5, 25.0, 60.0, 90.25, 109.0, 110.0];
        let normalized: Vec<f64> = fovs
            .iter()
            .map(|fov| normalizer.normalize(&settings(*fov, -4.0)).get(Field::Fov))
            .collect();
        for pair in normalized.windows(2) {
            assert!(pair[0] < pair[1], "{:?}", normalized);
        }
    }

    #[test]
    fn test_stable_across_calls() {
        let a = Normalizer::new(bounds()).normalize(&settings(87.0, -2.0));
        let b = Normalizer::new(bounds()).normalize(&settings(87.0, -2.0));
        assert_eq!(a, b);
    }
}

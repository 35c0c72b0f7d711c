//! Per-field distance between normalized camera settings
//!
//! The distance is an unweighted L1 (Manhattan) distance over the nine
//! normalized fields. Every field contributes equally; a score of 0.0 is an
//! exact match and 9.0 is the largest possible score.

use camsim_core::{Field, FieldVector};
use camsim_schema::NormalizedCameraSettings;
use serde::Serialize;

/// Largest possible score: every field differs by the full unit interval
pub const MAX_SCORE: f64 = 9.0;

/// Absolute difference of each field, in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldDistance {
    values: FieldVector,
}

impl FieldDistance {
    #[inline]
    pub fn get(&self, field: Field) -> f64 {
        self.values.get(field)
    }

    pub fn values(&self) -> &FieldVector {
        &self.values
    }

    /// Scalar similarity score: the sum of the per-field differences
    ///
    /// Summed in record order so equal inputs always produce bit-identical
    /// scores.
    pub fn score(&self) -> f64 {
        self.values.sum()
    }

    /// The field with the largest difference; the earliest field wins a tie
    pub fn largest(&self) -> (Field, f64) {
        self.values
            .iter()
            .fold((Field::CameraShake, f64::NEG_INFINITY), |best, (field, value)| {
                if value > best.1 {
                    (field, value)
                } else {
                    best
                }
            })
    }
}

/// Per-field absolute differences between `a` and `b`
pub fn distance(a: &NormalizedCameraSettings, b: &NormalizedCameraSettings) -> FieldDistance {
    FieldDistance {
        values: FieldVector::from_fn(|field| (a.get(field) - b.get(field)).abs()),
    }
}

/// Scalar score between `a` and `b`; lower is more similar
pub fn score(a: &NormalizedCameraSettings, b: &NormalizedCameraSettings) -> f64 {
    distance(a, b).score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::normalized;

    #[test]
    fn test_identity_scores_zero() {
        let a = normalized([1.0, 0.25, 0.5, 0.75, 0.1, 0.9, 0.3, 0.6, 0.0]);
        assert_eq!(score(&a, &a), 0.0);
        for (_, value) in distance(&a, &a).values().iter() {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_per_field_absolute_difference() {
        let a = normalized([1.0, 0.25, 0.5, 0.75, 0.0, 1.0, 0.5, 0.5, 0.0]);
        let b = normalized([0.0, 0.75, 0.5, 0.25, 1.0, 0.0, 0.5, 0.5, 0.0]);
        let d = distance(&a, &b);

        assert_eq!(d.get(Field::CameraShake), 1.0);
        assert_eq!(d.get(Field::Fov), 0.5);
        assert_eq!(d.get(Field::Height), 0.0);
        assert_eq!(d.get(Field::Angle), 0.5);
        assert_eq!(d.get(Field::Distance), 1.0);
        assert_eq!(d.get(Field::Stiffness), 1.0);
        assert_eq!(d.score(), 4.0);
    }

    #[test]
    fn test_symmetric() {
        let samples = [
            normalized([0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 1.0]),
            normalized([1.0, 0.33, 0.66, 0.99, 0.01, 0.5, 0.123, 0.456, 0.0]),
            normalized([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]),
            normalized([0.0, 0.7, 0.05, 0.95, 0.15, 0.85, 0.25, 0.75, 1.0]),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(score(a, b), score(b, a));
                assert_eq!(distance(a, b), distance(b, a));
            }
        }
    }

    #[test]
    fn test_score_bounds() {
        let zeros = normalized([0.0; 9]);
        let ones = normalized([1.0; 9]);
        assert_eq!(score(&zeros, &ones), MAX_SCORE);

        let mid = normalized([0.0, 0.3, 0.7, 0.2, 0.9, 0.4, 0.6, 0.1, 1.0]);
        let s = score(&zeros, &mid);
        assert!((0.0..=MAX_SCORE).contains(&s));
    }

    #[test]
    fn test_largest_field() {
        let a = normalized([0.0, 0.2, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.0]);
        let b = normalized([0.0, 0.9, 0.5, 0.5, 0.5, 0.5, 0.5, 0.4, 0.0]);
        let (field, value) = distance(&a, &b).largest();
        assert_eq!(field, Field::Fov);
        assert!((value - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_largest_field_prefers_earliest_on_tie() {
        let a = normalized([0.0; 9]);
        let (field, value) = distance(&a, &a).largest();
        assert_eq!(field, Field::CameraShake);
        assert_eq!(value, 0.0);
    }
}

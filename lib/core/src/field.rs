//! Camera setting fields
//!
//! The field set is fixed: nine fields in a fixed order. Two of them are
//! binary toggles, the other seven are real numbers bounded by the
//! [`BoundsTable`](crate::BoundsTable).

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of fields in a camera setting record
pub const FIELD_COUNT: usize = 9;

/// One camera setting field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CameraShake,
    Fov,
    Height,
    Angle,
    Distance,
    Stiffness,
    SwivelSpeed,
    TransitionSpeed,
    BallCamera,
}

/// How a field's raw value is constrained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Exactly 0 or 1
    Binary,
    /// A finite real number within `[min, max]` from the bounds table
    Bounded,
}

impl Field {
    /// All fields, in record order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::CameraShake,
        Field::Fov,
        Field::Height,
        Field::Angle,
        Field::Distance,
        Field::Stiffness,
        Field::SwivelSpeed,
        Field::TransitionSpeed,
        Field::BallCamera,
    ];

    /// The seven fields that carry `{min, max}` bounds
    pub const BOUNDED: [Field; 7] = [
        Field::Fov,
        Field::Height,
        Field::Angle,
        Field::Distance,
        Field::Stiffness,
        Field::SwivelSpeed,
        Field::TransitionSpeed,
    ];

    /// Wire name of the field
    pub fn name(self) -> &'static str {
        match self {
            Field::CameraShake => "cameraShake",
            Field::Fov => "fov",
            Field::Height => "height",
            Field::Angle => "angle",
            Field::Distance => "distance",
            Field::Stiffness => "stiffness",
            Field::SwivelSpeed => "swivelSpeed",
            Field::TransitionSpeed => "transitionSpeed",
            Field::BallCamera => "ballCamera",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::CameraShake | Field::BallCamera => FieldKind::Binary,
            _ => FieldKind::Bounded,
        }
    }

    /// Position of the field in record order
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One `f64` per field, indexed by [`Field`]
///
/// Serializes as a map keyed by the wire field names, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldVector([f64; FIELD_COUNT]);

impl FieldVector {
    pub fn new(values: [f64; FIELD_COUNT]) -> Self {
        Self(values)
    }

    pub fn splat(value: f64) -> Self {
        Self([value; FIELD_COUNT])
    }

    pub fn from_fn(mut f: impl FnMut(Field) -> f64) -> Self {
        let mut values = [0.0; FIELD_COUNT];
        for field in Field::ALL {
            values[field.index()] = f(field);
        }
        Self(values)
    }

    #[inline]
    pub fn get(&self, field: Field) -> f64 {
        self.0[field.index()]
    }

    /// Iterate `(field, value)` pairs in record order
    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Sum of the values, accumulated left to right in record order
    pub fn sum(&self) -> f64 {
        self.0.iter().fold(0.0, |acc, value| acc + value)
    }

    pub fn as_array(&self) -> &[f64; FIELD_COUNT] {
        &self.0
    }
}

impl Index<Field> for FieldVector {
    type Output = f64;

    fn index(&self, field: Field) -> &f64 {
        &self.0[field.index()]
    }
}

impl IndexMut<Field> for FieldVector {
    fn index_mut(&mut self, field: Field) -> &mut f64 {
        &mut self.0[field.index()]
    }
}

impl Serialize for FieldVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.name(), &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_is_fixed() {
        let names: Vec<_> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "cameraShake",
                "fov",
                "height",
                "angle",
                "distance",
                "stiffness",
                "swivelSpeed",
                "transitionSpeed",
                "ballCamera",
            ]
        );
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(Field::CameraShake.kind(), FieldKind::Binary);
        assert_eq!(Field::BallCamera.kind(), FieldKind::Binary);
        for field in Field::BOUNDED {
            assert_eq!(field.kind(), FieldKind::Bounded);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Field::from_name("swivelSpeed"), Some(Field::SwivelSpeed));
        assert_eq!(Field::from_name("swivel_speed"), None);
    }

    #[test]
    fn test_serde_names_match_wire_names() {
        for field in Field::ALL {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, serde_json::Value::String(field.name().to_string()));
        }
    }

    #[test]
    fn test_field_vector_serializes_as_map() {
        let mut vector = FieldVector::splat(0.0);
        vector[Field::Fov] = 0.5;
        let json = serde_json::to_value(vector).unwrap();
        assert_eq!(json["fov"], 0.5);
        assert_eq!(json["ballCamera"], 0.0);
        assert_eq!(json.as_object().unwrap().len(), FIELD_COUNT);
    }

    #[test]
    fn test_field_vector_sum() {
        let vector = FieldVector::from_fn(|field| field.index() as f64);
        assert_eq!(vector.sum(), 36.0);
    }
}

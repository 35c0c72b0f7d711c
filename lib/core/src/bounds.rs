//! Field bounds table
//!
//! Supplies `{min, max}` for each bounded field. The same table serves as the
//! legal domain during validation and as the reference frame during
//! normalization. A table is checked once when loaded and is immutable after.

use crate::field::{Field, FieldKind};
use crate::{Error, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::path::Path;

const BUNDLED_BOUNDS: &str = include_str!("../assets/camera_settings_values.json");

/// Inclusive `[min, max]` range of a bounded field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Rescale `value` from `[min, max]` onto `[0, 1]`
    #[inline]
    pub fn rescale(&self, value: f64) -> f64 {
        (value - self.min) / self.width()
    }
}

/// Bounds for the seven bounded fields
#[derive(Debug, Clone, PartialEq)]
pub struct BoundsTable {
    // indexed by position in Field::BOUNDED
    bounds: [Bound; 7],
}

impl BoundsTable {
    /// Build a table from a name-keyed map
    ///
    /// Every bounded field must be present with finite bounds and `min < max`.
    /// Keys that are not bounded field names are ignored.
    pub fn from_map(map: &HashMap<String, Bound>) -> Result<Self> {
        let mut bounds = [Bound::new(0.0, 1.0); 7];
        for (slot, field) in Field::BOUNDED.into_iter().enumerate() {
            let bound = *map.get(field.name()).ok_or(Error::MissingBounds(field))?;
            check_bound(field, bound)?;
            bounds[slot] = bound;
        }
        Ok(Self { bounds })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let map: HashMap<String, Bound> = serde_json::from_str(json)?;
        Self::from_map(&map)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The table compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_BOUNDS)
    }

    /// Bounds of a field, `None` for binary fields
    pub fn get(&self, field: Field) -> Option<&Bound> {
        match field.kind() {
            FieldKind::Binary => None,
            FieldKind::Bounded => Field::BOUNDED
                .iter()
                .position(|bounded| *bounded == field)
                .map(|slot| &self.bounds[slot]),
        }
    }

    /// Iterate `(field, bound)` pairs in record order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &Bound)> + '_ {
        Field::BOUNDED.into_iter().zip(self.bounds.iter())
    }
}

fn check_bound(field: Field, bound: Bound) -> Result<()> {
    // A finite pair can still overflow when subtracted
    if !bound.min.is_finite() || !bound.max.is_finite() || !bound.width().is_finite() {
        return Err(Error::NonFiniteBounds { field, min: bound.min, max: bound.max });
    }
    if bound.max <= bound.min {
        return Err(Error::DegenerateBounds { field, min: bound.min, max: bound.max });
    }
    Ok(())
}

impl Serialize for BoundsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.bounds.len()))?;
        for (field, bound) in self.iter() {
            map.serialize_entry(field.name(), bound)?;
        }
        map.end()
    }
}

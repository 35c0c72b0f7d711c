//! Configuration schema
//!
//! Validates raw settings into a [`CameraSettings`] value. Validation is the
//! only way to construct one, so holding a `CameraSettings` means every field
//! is present and within its bounds.

use camsim_core::{BoundsTable, Field, FieldKind, FieldVector, RawSettings};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A validated camera setting record
///
/// Binary fields hold exactly `0.0` or `1.0`; bounded fields lie within the
/// bounds table that validated them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CameraSettings {
    values: FieldVector,
}

impl CameraSettings {
    #[inline]
    pub fn get(&self, field: Field) -> f64 {
        self.values.get(field)
    }

    pub fn values(&self) -> &FieldVector {
        &self.values
    }
}

/// Validates raw settings against a bounds table
#[derive(Debug, Clone)]
pub struct Schema {
    bounds: Arc<BoundsTable>,
}

impl Schema {
    pub fn new(bounds: Arc<BoundsTable>) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &BoundsTable {
        &self.bounds
    }

    /// Validate all nine fields of `raw`
    ///
    /// Keys other than the nine field names are ignored. On failure, every
    /// failing field is reported, in record order.
    pub fn validate(&self, raw: &RawSettings) -> Result<CameraSettings, ValidationFailure> {
        let mut values = FieldVector::default();
        let mut errors = Vec::new();

        for field in Field::ALL {
            match self.validate_field(field, raw.get(field.name())) {
                Ok(value) => values[field] = value,
                Err(kind) => errors.push(FieldError { field, kind }),
            }
        }

        if errors.is_empty() {
            Ok(CameraSettings { values })
        } else {
            Err(ValidationFailure { errors })
        }
    }

    fn validate_field(&self, field: Field, raw: Option<&Value>) -> Result<f64, FieldErrorKind> {
        let value = coerce_number(raw)?;
        match field.kind() {
            FieldKind::Binary => {
                if value == 0.0 || value == 1.0 {
                    Ok(value)
                } else {
                    Err(FieldErrorKind::NotBinary { value })
                }
            }
            FieldKind::Bounded => {
                // BoundsTable::from_map guarantees every bounded field is present
                let bound = self.bounds.get(field).copied().ok_or(FieldErrorKind::Missing)?;
                if bound.contains(value) {
                    Ok(value)
                } else {
                    Err(FieldErrorKind::OutOfRange { value, min: bound.min, max: bound.max })
                }
            }
        }
    }
}

/// Turn a raw JSON value into a finite number
///
/// Numbers pass through; strings are trimmed and parsed. Null counts as
/// missing. Everything else, including empty strings, is the wrong type.
fn coerce_number(raw: Option<&Value>) -> Result<f64, FieldErrorKind> {
    let value = match raw {
        None | Some(Value::Null) => return Err(FieldErrorKind::Missing),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match value {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(FieldErrorKind::WrongType {
            found: raw.map(describe).unwrap_or_default(),
        }),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        other => other.to_string(),
    }
}

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldErrorKind {
    Missing,
    WrongType { found: String },
    NotBinary { value: f64 },
    OutOfRange { value: f64, min: f64, max: f64 },
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldErrorKind::Missing => write!(f, "missing"),
            FieldErrorKind::WrongType { found } => write!(f, "expected a number, found {}", found),
            FieldErrorKind::NotBinary { value } => write!(f, "expected 0 or 1, found {}", value),
            FieldErrorKind::OutOfRange { value, min, max } => {
                write!(f, "{} is outside [{}, {}]", value, min, max)
            }
        }
    }
}

/// A field that failed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: Field,
    #[serde(flatten)]
    pub kind: FieldErrorKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// Validation failed for one or more fields
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("invalid camera settings: {}", join_errors(.errors))]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|e| e.field)
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldErrorKind> {
        self.errors.iter().find(|e| e.field == field).map(|e| &e.kind)
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

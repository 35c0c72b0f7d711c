use crate::field::Field;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Bounds missing for field: {0}")]
    MissingBounds(Field),

    #[error("Degenerate bounds for field {field}: min {min} must be below max {max}")]
    DegenerateBounds { field: Field, min: f64, max: f64 },

    #[error("Non-finite bounds for field {field}: min {min}, max {max} (width must be finite)")]
    NonFiniteBounds { field: Field, min: f64, max: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

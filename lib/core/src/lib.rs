//! # camsim Core
//!
//! Core types shared by the camsim crates.
//!
//! - [`Field`] - the nine camera setting fields, in their fixed order
//! - [`FieldVector`] - one `f64` per field
//! - [`BoundsTable`] - `{min, max}` for each bounded field
//! - [`RawCandidate`] / [`RawSettings`] - records before validation
//!
//! ## Example
//!
//! ```rust
//! use camsim_core::{BoundsTable, Field};
//!
//! let bounds = BoundsTable::bundled().unwrap();
//! let fov = bounds.get(Field::Fov).unwrap();
//! assert!(fov.max > fov.min);
//! assert!(bounds.get(Field::BallCamera).is_none());
//! ```

pub mod error;
pub mod field;
pub mod bounds;
pub mod record;

pub use error::{Error, Result};
pub use field::{Field, FieldKind, FieldVector, FIELD_COUNT};
pub use bounds::{Bound, BoundsTable};
pub use record::{raw_settings_from_pairs, RawCandidate, RawSettings};

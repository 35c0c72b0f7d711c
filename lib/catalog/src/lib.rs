pub mod error;
pub mod snapshot;
pub mod extract;
pub mod source;

pub use error::{CatalogError, Result};
pub use snapshot::{Snapshot, DEFAULT_CATALOG_URL, EXPECTED_PAGE_ID, EXPECTED_TITLE};
pub use extract::extract_candidates;
pub use source::CatalogSource;

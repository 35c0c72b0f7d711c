use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unexpected page title {found:?}, expected {expected:?}; the page layout has likely changed")]
    UnexpectedTitle { expected: &'static str, found: String },

    #[error("Unexpected page id {found}, expected {expected}; the page layout has likely changed")]
    UnexpectedPageId { expected: u64, found: u64 },

    #[error("Invalid selector {selector:?}: {message}")]
    Selector { selector: &'static str, message: String },

    #[error("Failed to fetch catalog: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch catalog: HTTP {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

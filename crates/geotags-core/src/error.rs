// crates/geotags-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by tag generation and reference-table loading.
///
/// Unmatched lookups (unknown country code, unknown region, no change
/// record) are *not* errors; they simply produce no tags.
#[derive(Debug, Error)]
pub enum GeoTagError {
    /// The input was absent (`null` in JSON terms).
    #[error("input is required")]
    MissingInput,

    /// The input was present but not a JSON object.
    #[error("input must be an object, got {0}")]
    InvalidInput(String),

    /// A raw JSON value could not be read as a tag.
    #[error("invalid tag: {0}")]
    InvalidTag(String),

    /// A reference table file could not be found.
    #[error("reference data not found: {0}")]
    NotFound(String),

    /// A reference table exists but could not be opened or read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeoTagError>;

use thiserror::Error;

/// Main error type for the puzzle engine
#[derive(Error, Debug)]
pub enum CoordleError {
    /// No city is available, so no secret can be chosen
    #[error("City catalog is empty")]
    EmptyCatalog,

    /// City record rejected at the catalog boundary
    #[error("Invalid city '{name}': {reason}")]
    InvalidCity { name: String, reason: String },

    /// Identifier or slug used twice in one catalog
    #[error("Duplicate city {field}: {value}")]
    DuplicateCity { field: &'static str, value: String },

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Seed file could not be read
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CoordleError>;

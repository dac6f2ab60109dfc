// crates/pinmap-core/src/error.rs

use thiserror::Error;

/// Errors produced while loading the fixture or resolving map resources.
#[derive(Debug, Error)]
pub enum AtlasError {
    /// The fixture file could not be found at the given path.
    #[error("fixture not found: {0}")]
    NotFound(String),

    /// Underlying I/O failure while reading a fixture.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The fixture exists but is not valid JSON for the expected shape.
    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A gzip fixture was given but the `compact` feature is disabled.
    #[error("gzip fixture {0} requires the 'compact' feature")]
    Compressed(String),

    /// A tile layer needs an API key that was not configured.
    #[error("missing API key for tile layer '{0}'")]
    MissingApiKey(String),

    /// A suggestion index past the end of the current list.
    #[error("no suggestion at index {0}")]
    OutOfRange(usize),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AtlasError>;

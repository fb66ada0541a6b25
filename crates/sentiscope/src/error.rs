//! Error types for the Sentiscope library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Sentiscope operations.
#[derive(Debug, Error)]
pub enum SentiscopeError {
    /// An average was requested over zero reviews.
    #[error("Cannot compute an average rating from an empty review list")]
    EmptyReviews,

    /// The requested structure is not in the corpus.
    #[error("Unknown structure: {0}")]
    UnknownStructure(String),

    /// A structure was compared against itself.
    #[error("Select two different structures to compare (got '{0}' twice)")]
    SameStructure(String),

    /// A structure name was inserted into the corpus twice.
    #[error("Duplicate structure: {0}")]
    DuplicateStructure(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is absent from a delimited corpus file.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Corpus file contained no usable reviews.
    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),
}

/// Result type alias for Sentiscope operations.
pub type Result<T> = std::result::Result<T, SentiscopeError>;

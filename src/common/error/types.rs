//! Unified error types for deckgen.
use thiserror::Error;

/// Main error type for deckgen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Table rows do not all have the same number of cells
    #[error("Ragged table: row {row} has {got} cells, expected {expected}")]
    RaggedTable {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Table without rows or columns
    #[error("Empty table")]
    EmptyTable,

    /// Slide title is empty
    #[error("Slide {index} has an empty title")]
    EmptyTitle { index: usize },

    /// Invalid color literal
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// XML generation error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Background serialization task failed to complete
    #[error("Serialization task failed: {0}")]
    TaskFailed(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for deckgen operations.
pub type Result<T> = std::result::Result<T, Error>;

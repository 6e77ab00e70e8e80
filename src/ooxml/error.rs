/// Error types for OOXML operations.
use thiserror::Error;

/// Result type for OOXML operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for OOXML operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::ooxml::opc::error::OpcError),

    /// XML generation error
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid shape geometry or content
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for OoxmlError {
    fn from(err: std::fmt::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

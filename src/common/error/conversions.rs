//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from the
//! writer's internal error types to the unified Error type.

use super::types::Error;

impl From<crate::ooxml::opc::error::OpcError> for Error {
    fn from(err: crate::ooxml::opc::error::OpcError) -> Self {
        match err {
            crate::ooxml::opc::error::OpcError::IoError(e) => Error::Io(e),
            crate::ooxml::opc::error::OpcError::ZipError(e) => Error::ZipError(e.to_string()),
            other => Error::Other(other.to_string()),
        }
    }
}

impl From<crate::ooxml::error::OoxmlError> for Error {
    fn from(err: crate::ooxml::error::OoxmlError) -> Self {
        match err {
            crate::ooxml::error::OoxmlError::Opc(e) => Error::from(e),
            crate::ooxml::error::OoxmlError::Xml(s) => Error::XmlError(s),
            crate::ooxml::error::OoxmlError::Io(e) => Error::Io(e),
            other => Error::Other(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::TaskFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::error::OoxmlError;
    use crate::ooxml::opc::error::OpcError;

    #[test]
    fn test_xml_error_maps_through() {
        let err = Error::from(OoxmlError::Xml("bad".to_string()));
        assert!(matches!(err, Error::XmlError(ref s) if s == "bad"));
    }

    #[test]
    fn test_io_error_unwraps_layers() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(OoxmlError::Opc(OpcError::IoError(io)));
        assert!(matches!(err, Error::Io(_)));
    }
}

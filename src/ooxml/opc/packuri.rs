/// Provides the PackURI value type and utilities for working with package URIs.
///
/// A PackURI represents a part name within an OPC package, following the URI format
/// defined by the Open Packaging Conventions specification.
use crate::ooxml::opc::error::{OpcError, Result};

/// The package pseudo-partname, representing the package itself
pub const PACKAGE_URI: &str = "/";

/// The URI for the [Content_Types].xml part
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// A partname within an OPC package, e.g. `/ppt/slides/slide1.xml`.
///
/// PackURIs always begin with a forward slash and use forward slashes as path separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackURI {
    /// The full pack URI string (e.g., "/ppt/presentation.xml")
    uri: String,
}

impl PackURI {
    /// Create a new PackURI from a string.
    ///
    /// Returns an error if the URI doesn't start with a forward slash.
    pub fn new<S: Into<String>>(uri: S) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with('/') {
            return Err(OpcError::InvalidPackUri(format!(
                "PackURI must begin with slash, got '{}'",
                uri
            )));
        }
        Ok(PackURI { uri })
    }

    /// Get the base URI (directory portion) of this PackURI.
    ///
    /// For example, "/ppt/slides" for "/ppt/slides/slide1.xml".
    pub fn base_uri(&self) -> &str {
        match self.uri.rfind('/') {
            Some(0) | None => "/",
            Some(pos) => &self.uri[..pos],
        }
    }

    /// Get the filename portion of this PackURI.
    pub fn filename(&self) -> &str {
        match self.uri.rfind('/') {
            Some(pos) => &self.uri[pos + 1..],
            None => "",
        }
    }

    /// Get the extension (no leading period), e.g. "xml".
    pub fn ext(&self) -> &str {
        let filename = self.filename();
        match filename.rfind('.') {
            Some(pos) => &filename[pos + 1..],
            None => "",
        }
    }

    /// Get the membername (URI with leading slash stripped), used as the ZIP entry name.
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    /// Get the relative reference from a base URI to this PackURI.
    ///
    /// For example, PackURI("/ppt/slideLayouts/slideLayout1.xml") returns
    /// "../slideLayouts/slideLayout1.xml" for base_uri "/ppt/slides".
    pub fn relative_ref(&self, base_uri: &str) -> String {
        if base_uri == "/" {
            return self.membername().to_string();
        }

        let from_parts: Vec<&str> = base_uri.split('/').filter(|s| !s.is_empty()).collect();
        let to_parts: Vec<&str> = self.uri.split('/').filter(|s| !s.is_empty()).collect();

        let common = from_parts
            .iter()
            .zip(to_parts.iter())
            .take_while(|(a, b)| a == b)
            .count();

        let mut segments: Vec<&str> = vec![".."; from_parts.len() - common];
        segments.extend_from_slice(&to_parts[common..]);
        segments.join("/")
    }

    /// Get the PackURI of the .rels part corresponding to this PackURI.
    ///
    /// For example, "/ppt/slides/_rels/slide1.xml.rels" for "/ppt/slides/slide1.xml",
    /// and "/_rels/.rels" for the package pseudo-partname.
    pub fn rels_uri(&self) -> Result<PackURI> {
        let base_uri = self.base_uri();
        let rels_filename = format!("{}.rels", self.filename());

        if base_uri == "/" {
            Self::new(format!("/_rels/{}", rels_filename))
        } else {
            Self::new(format!("{}/_rels/{}", base_uri, rels_filename))
        }
    }

    /// Get the full URI string.
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri)
    }
}

impl AsRef<str> for PackURI {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

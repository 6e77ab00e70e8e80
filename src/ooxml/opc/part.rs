/// Open Packaging Convention (OPC) package parts.
///
/// Parts are the fundamental units of content in an OPC package, each with a
/// unique partname, a content type, and optional relationships to other parts.
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// A generated part: partname, content type, serialized bytes and outgoing relationships.
#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    /// Create a new part with no relationships.
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels: Relationships::new(),
        }
    }

    /// Get the partname of this part.
    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Get the content type of this part.
    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Get the binary content of this part.
    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the binary content of this part.
    ///
    /// Used when the content references relationship IDs that are only known
    /// after the part's relationships have been created.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    /// Get the relationships for this part.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Add or get a relationship to another part, returning its rId.
    ///
    /// The target reference is computed relative to this part's base URI.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(self.partname.base_uri());
        self.rels.get_or_add(reltype, &target_ref)
    }
}

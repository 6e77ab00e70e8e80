/// In-memory OPC package assembled for writing.
///
/// Parts are kept in insertion order so the ZIP entries come out in a stable,
/// readable order (content types first, then package rels, then parts).
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::rel::Relationships;
use std::collections::HashSet;

/// An Open Packaging Convention package under construction.
#[derive(Debug, Default)]
pub struct OpcPackage {
    /// Package-level relationships
    rels: Relationships,

    /// All parts in the package, in insertion order
    parts: Vec<Part>,

    /// Partnames already used, to reject duplicates
    partnames: HashSet<String>,
}

impl OpcPackage {
    /// Create a new empty OPC package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new part to the package.
    ///
    /// Returns an error if a part with the same partname was already added.
    pub fn add_part(&mut self, part: Part) -> Result<()> {
        if !self.partnames.insert(part.partname().to_string()) {
            return Err(OpcError::DuplicatePart(part.partname().to_string()));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Get an iterator over all parts in the package.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Get the number of parts in the package.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Get a reference to the package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package to a part, returning the relationship ID.
    pub fn relate_to(&mut self, partname: &PackURI, reltype: &str) -> String {
        self.rels.get_or_add(reltype, partname.membername())
    }

    /// Check if a part exists in the package.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.partnames.contains(partname.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};

    #[test]
    fn test_add_and_relate() {
        let mut pkg = OpcPackage::new();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        pkg.add_part(Part::new(pres.clone(), ct::PML_PRESENTATION_MAIN, Vec::new()))
            .unwrap();

        assert!(pkg.contains_part(&pres));
        assert_eq!(pkg.part_count(), 1);
        assert_eq!(pkg.relate_to(&pres, rt::OFFICE_DOCUMENT), "rId1");
        assert_eq!(pkg.rels().get("rId1").unwrap().target_ref(), "ppt/presentation.xml");
    }

    #[test]
    fn test_duplicate_part_rejected() {
        let mut pkg = OpcPackage::new();
        let uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        pkg.add_part(Part::new(uri.clone(), ct::PML_SLIDE, Vec::new())).unwrap();
        let err = pkg.add_part(Part::new(uri, ct::PML_SLIDE, Vec::new()));
        assert!(matches!(err, Err(OpcError::DuplicatePart(_))));
    }
}

/// Relationship-related objects for OPC packages.
///
/// Relationships connect a source (the package or a part) to target parts.
/// Only internal relationships are produced by this crate.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference, relative to the source's base URI
    target_ref: String,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Collection of relationships from a single source, in insertion order.
///
/// IDs are allocated sequentially ("rId1", "rId2", ...), so the order
/// relationships are added in is the order their IDs are assigned.
#[derive(Debug, Default, Clone)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or add a relationship to a target.
    ///
    /// If a relationship of the given type to the target already exists,
    /// returns its rId. Otherwise, creates a new one with the next rId.
    pub fn get_or_add(&mut self, reltype: &str, target_ref: &str) -> String {
        if let Some(rel) = self
            .rels
            .iter()
            .find(|rel| rel.reltype == reltype && rel.target_ref == target_ref)
        {
            return rel.r_id.clone();
        }

        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target_ref: target_ref.to_string(),
        });
        r_id
    }

    /// Get a relationship by its ID.
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// Iterate over relationships in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if there are no relationships.
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize relationships to the XML of a .rels part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            namespace::OPC_RELATIONSHIPS
        ));
        xml.push('\n');

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"  <Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            ));
            xml.push('\n');
        }

        xml.push_str("</Relationships>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.get_or_add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.get_or_add(rt::SLIDE, "slides/slide1.xml"), "rId2");
        assert_eq!(rels.get_or_add(rt::SLIDE, "slides/slide2.xml"), "rId3");
        assert_eq!(rels.len(), 3);
    }

    #[test]
    fn test_get_or_add_reuses_existing() {
        let mut rels = Relationships::new();
        let first = rels.get_or_add(rt::THEME, "theme/theme1.xml");
        let again = rels.get_or_add(rt::THEME, "theme/theme1.xml");
        assert_eq!(first, again);
        assert_eq!(rels.len(), 1);
        assert_eq!(rels.get("rId1").unwrap().target_ref(), "theme/theme1.xml");
    }

    #[test]
    fn test_to_xml() {
        let mut rels = Relationships::new();
        rels.get_or_add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        let xml = rels.to_xml();
        assert!(xml.contains(r#"<Relationship Id="rId1""#));
        assert!(xml.contains(r#"Target="../slideLayouts/slideLayout1.xml""#));
        assert!(xml.ends_with("</Relationships>"));
    }
}

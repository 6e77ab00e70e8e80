/// Slide types and implementation for PPTX presentations.
use crate::ooxml::error::Result;
use crate::ooxml::pptx::backgrounds::SlideBackground;
use crate::ooxml::pptx::template::SP_TREE_GROUP;

use super::super::format::{Frame, Paragraph};
use super::shape::{MutableShape, TableCellData};

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier)
    pub(crate) slide_id: u32,
    /// Slide title, used for outlines and logging
    pub(crate) title: Option<String>,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Slide background
    pub(crate) background: Option<SlideBackground>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            title: None,
            shapes: Vec::new(),
            background: None,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Set the slide title.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Get the slide title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set a background for the slide.
    pub fn set_background(&mut self, background: SlideBackground) {
        self.background = Some(background);
    }

    /// Get the background of the slide.
    pub fn background(&self) -> Option<&SlideBackground> {
        self.background.as_ref()
    }

    /// Next free shape ID; ID 1 belongs to the shape tree group.
    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + 2
    }

    /// Add a text box to the slide.
    ///
    /// Returns the new shape so fill, inset and anchoring can be chained.
    pub fn add_text_box(&mut self, paragraphs: Vec<Paragraph>, frame: Frame) -> &mut MutableShape {
        let shape_id = self.next_shape_id();
        self.add_named_text_box(format!("TextBox {}", shape_id), paragraphs, frame)
    }

    /// Add a text box with an explicit display name, e.g. "Title 2".
    pub fn add_named_text_box(
        &mut self,
        name: String,
        paragraphs: Vec<Paragraph>,
        frame: Frame,
    ) -> &mut MutableShape {
        let shape_id = self.next_shape_id();
        let index = self.shapes.len();
        self.shapes
            .push(MutableShape::new_text_box(shape_id, name, paragraphs, frame));
        &mut self.shapes[index]
    }

    /// Add a table to the slide.
    ///
    /// The rows must form a non-empty rectangle; the frame is split evenly
    /// between columns and rows.
    pub fn add_table(
        &mut self,
        rows: Vec<Vec<TableCellData>>,
        frame: Frame,
    ) -> Result<&mut MutableShape> {
        let shape = MutableShape::new_table(self.next_shape_id(), rows, frame)?;
        let index = self.shapes.len();
        self.shapes.push(shape);
        Ok(&mut self.shapes[index])
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Get the shapes on the slide.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);
        xml.push_str("<p:cSld>");

        // Background must come before spTree
        if let Some(ref background) = self.background {
            xml.push_str(&background.to_xml());
        }

        xml.push_str("<p:spTree>");
        xml.push_str(SP_TREE_GROUP);
        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }
        xml.push_str("</p:spTree>");

        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::pptx::format::TextFormat;

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut slide = MutableSlide::new(256);
        let first = slide
            .add_text_box(
                vec![Paragraph::plain("a", TextFormat::default())],
                Frame::new(0, 0, 10, 10),
            )
            .shape_id();
        let second = slide
            .add_table(vec![vec![TableCellData::new("x")]], Frame::new(0, 0, 10, 10))
            .unwrap()
            .shape_id();
        assert_eq!((first, second), (2, 3));
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(SlideBackground::solid(RGBColor::hex(0x1a1a2e)));
        slide.add_named_text_box(
            "Title 2".to_string(),
            vec![Paragraph::plain("Hello", TextFormat::sized(40.0))],
            Frame::from_inches(0.5, 0.3, 9.0, 0.8),
        );

        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"name="Title 2""#));
        assert!(xml.contains("<a:t>Hello</a:t>"));
    }

    #[test]
    fn test_ragged_table_leaves_slide_unchanged() {
        let mut slide = MutableSlide::new(256);
        let rows = vec![
            vec![TableCellData::new("a"), TableCellData::new("b")],
            vec![TableCellData::new("c")],
        ];
        assert!(slide.add_table(rows, Frame::new(0, 0, 10, 10)).is_err());
        assert_eq!(slide.shape_count(), 0);
    }
}

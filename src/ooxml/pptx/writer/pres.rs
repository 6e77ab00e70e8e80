/// Presentation writer for PPTX.
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::slide::MutableSlide;

/// Document properties written to docProps and the theme part.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationMetadata {
    pub title: String,
    pub subject: String,
    pub author: String,
    /// Name of the generated theme part
    pub theme_name: String,
    /// Theme heading font
    pub major_font: String,
    /// Theme body font
    pub minor_font: String,
}

impl Default for PresentationMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            subject: String::new(),
            author: String::new(),
            theme_name: "Office Theme".to_string(),
            major_font: "Calibri".to_string(),
            minor_font: "Calibri".to_string(),
        }
    }
}

/// A mutable PowerPoint presentation for writing.
///
/// Provides methods to add and modify slides and set dimensions.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Document properties
    pub(crate) metadata: PresentationMetadata,
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 5.625" (16:9 widescreen).
    pub fn new() -> Self {
        Self {
            metadata: PresentationMetadata::default(),
            slides: Vec::new(),
            slide_width: 9_144_000,  // 10 inches
            slide_height: 5_143_500, // 5.625 inches
        }
    }

    /// Create a presentation with the given document properties.
    pub fn with_metadata(metadata: PresentationMetadata) -> Self {
        Self {
            metadata,
            ..Self::new()
        }
    }

    /// Get the document properties.
    pub fn metadata(&self) -> &PresentationMetadata {
        &self.metadata
    }

    /// Get mutable document properties.
    pub fn metadata_mut(&mut self) -> &mut PresentationMetadata {
        &mut self.metadata
    }

    /// Append a new slide to the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let slide_id = (self.slides.len() + 256) as u32;
        let index = self.slides.len();
        self.slides.push(MutableSlide::new(slide_id));
        &mut self.slides[index]
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    /// Iterate over the slides in order.
    pub fn slides(&self) -> impl Iterator<Item = &MutableSlide> {
        self.slides.iter()
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide size in EMUs.
    pub fn set_slide_size(&mut self, width: i64, height: i64) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Generate presentation.xml content.
    ///
    /// # Arguments
    /// * `master_rel_id` - relationship ID of the slide master
    /// * `slide_rel_ids` - relationship IDs of the slides, in slide order
    pub(crate) fn generate_presentation_xml(
        &self,
        master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // Write slide master ID list
        xml.push_str("<p:sldMasterIdLst>");
        write!(
            xml,
            r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#,
            master_rel_id
        )?;
        xml.push_str("</p:sldMasterIdLst>");

        // Write slide ID list
        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        // Write slide size
        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

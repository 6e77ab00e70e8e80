//! Slide background support.

use crate::common::RGBColor;

/// Slide background configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideBackground {
    /// Solid color background
    Solid {
        /// Fill color
        color: RGBColor,
    },
}

impl SlideBackground {
    /// Create a solid color background.
    pub fn solid(color: RGBColor) -> Self {
        Self::Solid { color }
    }

    /// Generate the `p:bg` element; it must precede `p:spTree` inside `p:cSld`.
    pub(crate) fn to_xml(&self) -> String {
        match self {
            SlideBackground::Solid { color } => format!(
                "<p:bg><p:bgPr><a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>",
                color.to_hex()
            ),
        }
    }
}

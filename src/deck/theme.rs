//! Deck themes: palette, typography and layout constants.

use crate::common::RGBColor;

/// Colour palette of a deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Background of content and section slides; `None` keeps the master's white
    pub background: Option<RGBColor>,
    /// Background of title slides
    pub title_background: Option<RGBColor>,
    /// Title slide heading
    pub title: RGBColor,
    /// Subtitle under a title or section heading
    pub subtitle: RGBColor,
    /// Content slide headline
    pub headline: RGBColor,
    pub body: RGBColor,
    pub accent: RGBColor,
    pub subtle: RGBColor,
    /// Bold inline labels
    pub emphasis: RGBColor,
    pub success: RGBColor,
    pub code_text: RGBColor,
    pub code_background: RGBColor,
    pub table_header: RGBColor,
    pub table_header_text: RGBColor,
    pub table_text: RGBColor,
    /// Fill of body rows
    pub table_fill: RGBColor,
    /// Fill of every other body row; `None` disables banding
    pub table_band: Option<RGBColor>,
    /// Table cell border
    pub border: Option<RGBColor>,
}

/// Fonts and point sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub heading_font: String,
    pub body_font: String,
    pub mono_font: String,
    pub title_size: f64,
    pub subtitle_size: f64,
    pub tagline_size: f64,
    pub section_size: f64,
    pub section_subtitle_size: f64,
    pub headline_size: f64,
    pub body_size: f64,
    pub code_size: f64,
    pub table_size: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            heading_font: "Arial".to_string(),
            body_font: "Arial".to_string(),
            mono_font: "Courier New".to_string(),
            title_size: 44.0,
            subtitle_size: 24.0,
            tagline_size: 14.0,
            section_size: 40.0,
            section_subtitle_size: 20.0,
            headline_size: 32.0,
            body_size: 18.0,
            code_size: 14.0,
            table_size: 14.0,
        }
    }
}

/// Vertical stack of a centered title or section slide, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleLayout {
    pub top: f64,
    pub height: f64,
    /// Subtitle top, relative to `top`
    pub subtitle_offset: f64,
    pub subtitle_height: f64,
    /// Tagline top, relative to `top`
    pub tagline_offset: f64,
    pub tagline_height: f64,
}

/// Geometry and per-item defaults, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Left edge of the content column
    pub margin_x: f64,
    pub content_width: f64,
    pub headline_top: f64,
    pub headline_height: f64,
    /// Where the cursor starts on a content slide
    pub content_top: f64,
    pub title: TitleLayout,
    pub section: TitleLayout,
    /// Default advance after a text item
    pub text_spacing: f64,
    /// Default advance per bullet-list line
    pub bullet_line_spacing: f64,
    /// Default advance after a code block
    pub code_spacing: f64,
    /// Default advance after a table
    pub table_spacing: f64,
    pub table_row_height: f64,
    /// Extra left indent of list text boxes
    pub list_indent: f64,
    /// Uniform inner margin of code blocks, in points
    pub code_inset: Option<f64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let title = TitleLayout {
            top: 2.5,
            height: 1.0,
            subtitle_offset: 1.0,
            subtitle_height: 1.0,
            tagline_offset: 1.6,
            tagline_height: 0.4,
        };
        Self {
            margin_x: 0.5,
            content_width: 9.0,
            headline_top: 0.3,
            headline_height: 0.8,
            content_top: 1.2,
            title,
            section: title,
            text_spacing: 0.5,
            bullet_line_spacing: 0.4,
            code_spacing: 1.5,
            table_spacing: 2.0,
            table_row_height: 0.4,
            list_indent: 0.0,
            code_inset: None,
        }
    }
}

/// A complete deck theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Name of the generated theme part
    pub name: String,
    pub palette: Palette,
    pub typography: Typography,
    pub layout: LayoutConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_defaults() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.text_spacing, 0.5);
        assert_eq!(layout.bullet_line_spacing, 0.4);
        assert_eq!(layout.code_spacing, 1.5);
        assert_eq!(layout.table_spacing, 2.0);
        assert_eq!(layout.margin_x + layout.content_width, 9.5);
    }
}

//! Format types for PPTX shapes: geometry, paragraphs and run properties.

use crate::common::RGBColor;
use crate::common::unit::inch_to_emu;

/// Position and size of a shape, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Frame {
    /// Create a frame from EMU values.
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a frame from inch values.
    pub fn from_inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            inch_to_emu(x),
            inch_to_emu(y),
            inch_to_emu(width),
            inch_to_emu(height),
        )
    }
}

/// Horizontal paragraph alignment (`algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub(crate) fn as_attr(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Vertical text anchoring inside a text box (`anchor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    pub(crate) fn as_attr(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Text formatting properties for a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
}

impl TextFormat {
    /// Format with only a size set.
    pub fn sized(size: f64) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }
}

/// A run of uniformly formatted text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub format: TextFormat,
}

/// List marker drawn in front of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphMarker {
    /// Character bullet (`a:buChar`)
    Bullet(char),
    /// Auto-numbered `1.`, `2.`, ... (`a:buAutoNum type="arabicPeriod"`)
    Numbered,
}

/// A paragraph inside a text body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    pub align: Option<Alignment>,
    pub marker: Option<ParagraphMarker>,
}

impl Paragraph {
    /// Single-run paragraph.
    pub fn plain(text: &str, format: TextFormat) -> Self {
        Self {
            runs: vec![TextRun {
                text: text.to_string(),
                format,
            }],
            align: None,
            marker: None,
        }
    }

    pub fn aligned(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_marker(mut self, marker: ParagraphMarker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Split multi-line text into one paragraph per line, all sharing a format.
    pub fn lines(text: &str, format: &TextFormat) -> Vec<Self> {
        text.split('\n')
            .map(|line| Self::plain(line.trim_end_matches('\r'), format.clone()))
            .collect()
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_from_inches() {
        let frame = Frame::from_inches(0.5, 1.2, 9.0, 0.5);
        assert_eq!(frame.x, 457_200);
        assert_eq!(frame.y, 1_097_280);
        assert_eq!(frame.width, 8_229_600);
    }

    #[test]
    fn test_lines_split() {
        let fmt = TextFormat::sized(14.0);
        let paras = Paragraph::lines("# Start\nclaude\n", &fmt);
        assert_eq!(paras.len(), 3);
        assert_eq!(paras[0].text(), "# Start");
        assert_eq!(paras[2].text(), "");
    }
}

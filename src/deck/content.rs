//! Declarative slide content.
//!
//! A deck is a list of [`SlideSpec`] values. Each spec names its title, a
//! [`SlideKind`] and optionally a background; content slides carry an
//! ordered list of [`ContentItem`]s that the builder places top to bottom.

use crate::common::{Error, RGBColor, Result};
use crate::ooxml::pptx::Alignment;
use serde::Serialize;

/// Optional per-item overrides. Unset fields fall back to the theme and
/// [`LayoutConfig`](super::LayoutConfig) defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ItemStyle {
    /// Font size in points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<RGBColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    /// Vertical advance after the item, in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    /// Left edge in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Width in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Frame height in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Alignment>,
}

impl ItemStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn spacing(mut self, inches: f64) -> Self {
        self.spacing = Some(inches);
        self
    }

    /// Place the item at `x` with the given width instead of the content column.
    pub fn column(mut self, x: f64, width: f64) -> Self {
        self.x = Some(x);
        self.width = Some(width);
        self
    }

    pub fn height(mut self, inches: f64) -> Self {
        self.height = Some(inches);
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }
}

/// List marker style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListMarker {
    #[default]
    Bullet,
    Numbered,
}

/// One table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableCell {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<RGBColor>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    /// Render in the monospace font
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub mono: bool,
}

impl TableCell {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn filled(mut self, fill: RGBColor) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn mono(mut self) -> Self {
        self.mono = true;
        self
    }
}

impl From<&str> for TableCell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A rectangular table: at least one row, at least one column, every row the
/// same width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    rows: Vec<Vec<TableCell>>,
    /// Whether the first row is a header row
    header: bool,
}

impl Table {
    /// Build a table, rejecting empty or ragged cell matrices.
    pub fn new(rows: Vec<Vec<TableCell>>, header: bool) -> Result<Self> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(Error::EmptyTable),
        };
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(Error::RaggedTable {
                row,
                expected,
                got: cells.len(),
            });
        }
        Ok(Self { rows, header })
    }

    pub fn rows(&self) -> &[Vec<TableCell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn has_header(&self) -> bool {
        self.header
    }
}

/// A content block placed on a content slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Text {
        value: String,
        style: ItemStyle,
    },
    BulletList {
        items: Vec<String>,
        marker: ListMarker,
        style: ItemStyle,
    },
    CodeBlock {
        value: String,
        style: ItemStyle,
    },
    Table {
        table: Table,
        style: ItemStyle,
    },
}

impl ContentItem {
    pub fn text(value: &str) -> Self {
        Self::Text {
            value: value.to_string(),
            style: ItemStyle::default(),
        }
    }

    pub fn bullets(items: &[&str]) -> Self {
        Self::list(items, ListMarker::Bullet)
    }

    pub fn numbered(items: &[&str]) -> Self {
        Self::list(items, ListMarker::Numbered)
    }

    fn list(items: &[&str], marker: ListMarker) -> Self {
        Self::BulletList {
            items: items.iter().map(|s| s.to_string()).collect(),
            marker,
            style: ItemStyle::default(),
        }
    }

    pub fn code(value: &str) -> Self {
        Self::CodeBlock {
            value: value.to_string(),
            style: ItemStyle::default(),
        }
    }

    /// Table item; fails on ragged or empty rows.
    pub fn table(rows: Vec<Vec<TableCell>>, header: bool) -> Result<Self> {
        Ok(Self::Table {
            table: Table::new(rows, header)?,
            style: ItemStyle::default(),
        })
    }

    /// Replace the item's style.
    pub fn with_style(mut self, new_style: ItemStyle) -> Self {
        *self.style_mut() = new_style;
        self
    }

    pub fn style(&self) -> &ItemStyle {
        match self {
            Self::Text { style, .. }
            | Self::BulletList { style, .. }
            | Self::CodeBlock { style, .. }
            | Self::Table { style, .. } => style,
        }
    }

    fn style_mut(&mut self) -> &mut ItemStyle {
        match self {
            Self::Text { style, .. }
            | Self::BulletList { style, .. }
            | Self::CodeBlock { style, .. }
            | Self::Table { style, .. } => style,
        }
    }
}

/// Slide variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideKind {
    /// Centered title with optional subtitle and tagline
    Title {
        #[serde(skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tagline: Option<String>,
    },
    /// Centered section divider
    Section {
        #[serde(skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
    },
    /// Headline followed by content items
    Content { items: Vec<ContentItem> },
}

/// Description of one slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideSpec {
    pub title: String,
    #[serde(flatten)]
    pub kind: SlideKind,
    /// Overrides the theme background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<RGBColor>,
}

impl SlideSpec {
    pub fn title(title: &str, subtitle: Option<&str>) -> Self {
        Self::new(
            title,
            SlideKind::Title {
                subtitle: subtitle.map(str::to_string),
                tagline: None,
            },
        )
    }

    pub fn section(title: &str, subtitle: Option<&str>) -> Self {
        Self::new(
            title,
            SlideKind::Section {
                subtitle: subtitle.map(str::to_string),
            },
        )
    }

    pub fn content(title: &str, items: Vec<ContentItem>) -> Self {
        Self::new(title, SlideKind::Content { items })
    }

    fn new(title: &str, kind: SlideKind) -> Self {
        Self {
            title: title.to_string(),
            kind,
            background: None,
        }
    }

    /// Set the tagline line of a title slide; other kinds are unchanged.
    pub fn with_tagline(mut self, text: &str) -> Self {
        if let SlideKind::Title { ref mut tagline, .. } = self.kind {
            *tagline = Some(text.to_string());
        }
        self
    }

    pub fn with_background(mut self, color: RGBColor) -> Self {
        self.background = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<TableCell> {
        cells.iter().map(|c| TableCell::new(c)).collect()
    }

    #[test]
    fn test_rectangular_table() {
        let table = Table::new(vec![row(&["a", "b"]), row(&["c", "d"])], true).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert!(table.has_header());
    }

    #[test]
    fn test_ragged_table_rejected() {
        let err = Table::new(vec![row(&["a", "b"]), row(&["c"])], false).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedTable {
                row: 1,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(Table::new(vec![], false), Err(Error::EmptyTable)));
        assert!(matches!(Table::new(vec![vec![]], false), Err(Error::EmptyTable)));
    }

    #[test]
    fn test_with_style_applies_to_every_variant() {
        let style = ItemStyle::new().spacing(0.3).bold();
        for item in [
            ContentItem::text("t"),
            ContentItem::bullets(&["a"]),
            ContentItem::code("c"),
            ContentItem::table(vec![row(&["x"])], false).unwrap(),
        ] {
            assert_eq!(item.with_style(style).style(), &style);
        }
    }

    #[test]
    fn test_tagline_only_on_title_slides() {
        let title = SlideSpec::title("Questions?", None).with_tagline("Built with Claude Code");
        assert!(matches!(
            title.kind,
            SlideKind::Title { tagline: Some(ref t), .. } if t == "Built with Claude Code"
        ));

        let section = SlideSpec::section("Skills", None).with_tagline("ignored");
        assert_eq!(section.kind, SlideKind::Section { subtitle: None });
    }

    #[test]
    fn test_outline_json() {
        let spec = SlideSpec::content(
            "Core Functions",
            vec![ContentItem::text("ok").with_style(ItemStyle::new().color(RGBColor::hex(0x00ff00)))],
        );
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["title"], "Core Functions");
        assert_eq!(json["kind"], "content");
        assert_eq!(json["items"][0]["type"], "text");
        assert_eq!(json["items"][0]["style"]["color"], "00FF00");
        assert!(json["items"][0]["style"].get("size").is_none());
    }
}

//! Vertical placement of content items.
//!
//! Placement is additive: each item starts at the cursor and the cursor
//! moves down by the item's spacing, or by its tag default when unset.
//! Nothing checks for overlap or for content running off the slide.

use super::content::ContentItem;
use super::theme::LayoutConfig;
use crate::ooxml::pptx::Frame;

/// Current vertical position on a content slide, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    y: f64,
}

impl LayoutCursor {
    /// Cursor at the top of the content area.
    pub fn start(config: &LayoutConfig) -> Self {
        Self::at(config.content_top)
    }

    pub fn at(y: f64) -> Self {
        Self { y }
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn advance(self, by: f64) -> Self {
        Self { y: self.y + by }
    }
}

/// Resolved item geometry, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    pub fn frame(&self) -> Frame {
        Frame::from_inches(self.x, self.y, self.width, self.height)
    }
}

/// Advance used when an item has no explicit spacing.
pub fn default_advance(item: &ContentItem, config: &LayoutConfig) -> f64 {
    match item {
        ContentItem::Text { .. } => config.text_spacing,
        ContentItem::BulletList { items, .. } => items.len() as f64 * config.bullet_line_spacing,
        ContentItem::CodeBlock { .. } => config.code_spacing,
        ContentItem::Table { .. } => config.table_spacing,
    }
}

/// Vertical advance of an item after placement.
pub fn advance_for(item: &ContentItem, config: &LayoutConfig) -> f64 {
    item.style()
        .spacing
        .unwrap_or_else(|| default_advance(item, config))
}

fn natural_height(item: &ContentItem, config: &LayoutConfig, advance: f64) -> f64 {
    match item {
        ContentItem::Text { .. } => config.text_spacing,
        ContentItem::BulletList { items, .. } => items.len() as f64 * config.bullet_line_spacing,
        ContentItem::CodeBlock { .. } if advance > 0.0 => advance,
        ContentItem::CodeBlock { .. } => config.code_spacing,
        ContentItem::Table { table, .. } => table.row_count() as f64 * config.table_row_height,
    }
}

/// Place an item at the cursor and return the advanced cursor.
pub fn place(
    item: &ContentItem,
    cursor: LayoutCursor,
    config: &LayoutConfig,
) -> (Placement, LayoutCursor) {
    let style = item.style();
    let advance = advance_for(item, config);
    let indent = match item {
        ContentItem::BulletList { .. } => config.list_indent,
        _ => 0.0,
    };

    let x = style.x.unwrap_or(config.margin_x) + indent;
    let width = style.width.unwrap_or(config.content_width) - indent;
    let height = style
        .height
        .unwrap_or_else(|| natural_height(item, config, advance));

    let placement = Placement {
        x,
        y: cursor.y(),
        width,
        height,
    };
    (placement, cursor.advance(advance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::content::{ItemStyle, TableCell};

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_tag_defaults() {
        let cfg = config();
        let start = LayoutCursor::start(&cfg);
        assert!(approx(start.y(), 1.2));

        let (p, next) = place(&ContentItem::text("a"), start, &cfg);
        assert!(approx(p.y, 1.2));
        assert!(approx(next.y(), 1.7));

        let (_, next) = place(&ContentItem::code("x"), next, &cfg);
        assert!(approx(next.y(), 3.2));

        let table = ContentItem::table(vec![vec![TableCell::new("a")]], false).unwrap();
        let (_, next) = place(&table, next, &cfg);
        assert!(approx(next.y(), 5.2));
    }

    #[test]
    fn test_bullet_default_scales_with_lines() {
        let cfg = config();
        let list = ContentItem::bullets(&["one", "two", "three"]);
        let (p, next) = place(&list, LayoutCursor::at(2.0), &cfg);
        assert!(approx(next.y(), 2.0 + 3.0 * 0.4));
        assert!(approx(p.height, 1.2));
    }

    #[test]
    fn test_explicit_spacing_wins() {
        let cfg = config();
        let item = ContentItem::text("label").with_style(ItemStyle::new().spacing(0.3));
        let (_, next) = place(&item, LayoutCursor::at(1.0), &cfg);
        assert!(approx(next.y(), 1.3));

        let list = ContentItem::bullets(&["a", "b"]).with_style(ItemStyle::new().spacing(0.1));
        let (_, next) = place(&list, LayoutCursor::at(1.0), &cfg);
        assert!(approx(next.y(), 1.1));
    }

    #[test]
    fn test_zero_spacing_keeps_row() {
        let cfg = config();
        let left = ContentItem::code("tree").with_style(ItemStyle::new().spacing(0.0).column(0.75, 4.0));
        let (p, next) = place(&left, LayoutCursor::at(1.5), &cfg);
        assert!(approx(next.y(), 1.5));
        assert!(approx(p.x, 0.75));
        assert!(approx(p.width, 4.0));
        assert!(approx(p.height, cfg.code_spacing));
    }

    #[test]
    fn test_list_indent() {
        let cfg = LayoutConfig {
            list_indent: 0.2,
            ..config()
        };
        let (p, _) = place(&ContentItem::bullets(&["a"]), LayoutCursor::start(&cfg), &cfg);
        assert!(approx(p.x, 0.7));
        assert!(approx(p.width, 8.8));
    }
}

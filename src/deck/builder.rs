//! Rendering of slide specs into a presentation.

use super::content::{ContentItem, ListMarker, SlideKind, SlideSpec, Table};
use super::layout::{LayoutCursor, place};
use super::theme::{Theme, TitleLayout};
use crate::common::{Error, RGBColor, Result};
use crate::ooxml::pptx::{
    Alignment, Frame, MutablePresentation, MutableSlide, Paragraph, ParagraphMarker,
    SlideBackground, TableCellData, TextFormat, VerticalAnchor,
};
use tracing::debug;

/// Reference to a slide added by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideHandle {
    /// 0-based position in the deck
    pub index: usize,
    pub slide_id: u32,
}

/// Appends slides to a presentation using a theme.
///
/// Slides are added in call order; rendering never removes or reorders
/// existing slides.
pub struct SlideBuilder<'a> {
    pres: &'a mut MutablePresentation,
    theme: &'a Theme,
}

impl<'a> SlideBuilder<'a> {
    pub fn new(pres: &'a mut MutablePresentation, theme: &'a Theme) -> Self {
        Self { pres, theme }
    }

    /// Render every spec in order.
    pub fn render_all(&mut self, specs: &[SlideSpec]) -> Result<Vec<SlideHandle>> {
        specs.iter().map(|spec| self.render(spec)).collect()
    }

    /// Render one spec as a new slide.
    pub fn render(&mut self, spec: &SlideSpec) -> Result<SlideHandle> {
        let index = self.pres.slide_count();
        if spec.title.trim().is_empty() {
            return Err(Error::EmptyTitle { index });
        }

        let theme = self.theme;
        let palette = &theme.palette;
        let background = match spec.kind {
            SlideKind::Title { .. } => spec
                .background
                .or(palette.title_background)
                .or(palette.background),
            _ => spec.background.or(palette.background),
        };

        let slide = self.pres.add_slide();
        slide.set_title(&spec.title);
        if let Some(color) = background {
            slide.set_background(SlideBackground::solid(color));
        }

        match &spec.kind {
            SlideKind::Title { subtitle, tagline } => {
                render_centered(slide, theme, &spec.title, TitleStack::Title, subtitle.as_deref());
                if let Some(tagline) = tagline {
                    let stack = &theme.layout.title;
                    let format = body_format(theme, theme.typography.tagline_size, palette.subtle);
                    slide.add_text_box(
                        centered_lines(tagline, &format),
                        centered_frame(theme, stack.top + stack.tagline_offset, stack.tagline_height),
                    );
                }
            },
            SlideKind::Section { subtitle } => {
                render_centered(slide, theme, &spec.title, TitleStack::Section, subtitle.as_deref());
            },
            SlideKind::Content { items } => {
                render_headline(slide, theme, &spec.title);
                let mut cursor = LayoutCursor::start(&theme.layout);
                for item in items {
                    cursor = render_item(slide, theme, item, cursor)?;
                }
            },
        }

        let handle = SlideHandle {
            index,
            slide_id: slide.slide_id(),
        };
        debug!(
            index,
            title = %spec.title,
            shapes = slide.shape_count(),
            "rendered slide"
        );
        Ok(handle)
    }

    /// Add a centered title slide.
    pub fn title_slide(&mut self, title: &str, subtitle: Option<&str>) -> Result<SlideHandle> {
        self.render(&SlideSpec::title(title, subtitle))
    }

    /// Add a centered section divider.
    pub fn section_slide(&mut self, title: &str, subtitle: Option<&str>) -> Result<SlideHandle> {
        self.render(&SlideSpec::section(title, subtitle))
    }

    /// Add a headline slide with content items.
    pub fn content_slide(&mut self, title: &str, items: Vec<ContentItem>) -> Result<SlideHandle> {
        self.render(&SlideSpec::content(title, items))
    }
}

#[derive(Clone, Copy)]
enum TitleStack {
    Title,
    Section,
}

fn body_format(theme: &Theme, size: f64, color: RGBColor) -> TextFormat {
    TextFormat::sized(size)
        .with_color(color)
        .with_font(&theme.typography.body_font)
}

fn centered_lines(text: &str, format: &TextFormat) -> Vec<Paragraph> {
    Paragraph::lines(text, format)
        .into_iter()
        .map(|p| p.aligned(Alignment::Center))
        .collect()
}

fn centered_frame(theme: &Theme, top: f64, height: f64) -> Frame {
    Frame::from_inches(
        theme.layout.margin_x,
        top,
        theme.layout.content_width,
        height,
    )
}

fn render_centered(
    slide: &mut MutableSlide,
    theme: &Theme,
    title: &str,
    stack: TitleStack,
    subtitle: Option<&str>,
) {
    let typo = &theme.typography;
    let palette = &theme.palette;
    let (layout, title_size, title_color, subtitle_size): (&TitleLayout, _, _, _) = match stack {
        TitleStack::Title => (
            &theme.layout.title,
            typo.title_size,
            palette.title,
            typo.subtitle_size,
        ),
        TitleStack::Section => (
            &theme.layout.section,
            typo.section_size,
            palette.headline,
            typo.section_subtitle_size,
        ),
    };

    let title_format = TextFormat::sized(title_size)
        .with_color(title_color)
        .with_bold(true)
        .with_font(&typo.heading_font);
    slide.add_named_text_box(
        "Title".to_string(),
        centered_lines(title, &title_format),
        centered_frame(theme, layout.top, layout.height),
    );

    if let Some(subtitle) = subtitle {
        let format = body_format(theme, subtitle_size, palette.subtitle);
        slide.add_named_text_box(
            "Subtitle".to_string(),
            centered_lines(subtitle, &format),
            centered_frame(theme, layout.top + layout.subtitle_offset, layout.subtitle_height),
        );
    }
}

fn render_headline(slide: &mut MutableSlide, theme: &Theme, title: &str) {
    let layout = &theme.layout;
    let format = TextFormat::sized(theme.typography.headline_size)
        .with_color(theme.palette.headline)
        .with_bold(true)
        .with_font(&theme.typography.heading_font);
    slide.add_named_text_box(
        "Title".to_string(),
        Paragraph::lines(title, &format),
        Frame::from_inches(
            layout.margin_x,
            layout.headline_top,
            layout.content_width,
            layout.headline_height,
        ),
    );
}

fn render_item(
    slide: &mut MutableSlide,
    theme: &Theme,
    item: &ContentItem,
    cursor: LayoutCursor,
) -> Result<LayoutCursor> {
    let (placement, next) = place(item, cursor, &theme.layout);
    let frame = placement.frame();
    let style = item.style();
    let typo = &theme.typography;
    let palette = &theme.palette;

    match item {
        ContentItem::Text { value, .. } => {
            let format = body_format(
                theme,
                style.size.unwrap_or(typo.body_size),
                style.color.unwrap_or(palette.body),
            )
            .with_bold(style.bold.unwrap_or(false));
            let paragraphs = Paragraph::lines(value, &format)
                .into_iter()
                .map(|p| match style.align {
                    Some(align) => p.aligned(align),
                    None => p,
                })
                .collect();
            slide.add_text_box(paragraphs, frame);
        },
        ContentItem::BulletList { items, marker, .. } => {
            let format = body_format(
                theme,
                style.size.unwrap_or(typo.body_size),
                style.color.unwrap_or(palette.body),
            )
            .with_bold(style.bold.unwrap_or(false));
            let marker = match marker {
                ListMarker::Bullet => ParagraphMarker::Bullet('•'),
                ListMarker::Numbered => ParagraphMarker::Numbered,
            };
            let paragraphs = items
                .iter()
                .map(|text| Paragraph::plain(text, format.clone()).with_marker(marker))
                .collect();
            slide.add_text_box(paragraphs, frame);
        },
        ContentItem::CodeBlock { value, .. } => {
            let format = TextFormat::sized(style.size.unwrap_or(typo.code_size))
                .with_color(style.color.unwrap_or(palette.code_text))
                .with_font(&typo.mono_font);
            let shape = slide.add_text_box(Paragraph::lines(value, &format), frame);
            shape
                .fill(palette.code_background)
                .anchor(VerticalAnchor::Top);
            if let Some(inset) = theme.layout.code_inset {
                shape.inset(inset);
            }
        },
        ContentItem::Table { table, .. } => {
            let rows = table_cells(theme, table, style.size);
            let shape = slide.add_table(rows, frame)?;
            if let Some(border) = palette.border {
                shape.border(border, 1.0);
            }
            if table.has_header() {
                shape.header_row(palette.table_band.is_some());
            }
        },
    }

    Ok(next)
}

/// Resolve cell fills and fonts: explicit cell fill, then header fill, then
/// banded body fill.
fn table_cells(theme: &Theme, table: &Table, size: Option<f64>) -> Vec<Vec<TableCellData>> {
    let typo = &theme.typography;
    let palette = &theme.palette;
    let size = size.unwrap_or(typo.table_size);

    table
        .rows()
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let is_header = table.has_header() && row_index == 0;
            let body_index = if table.has_header() { row_index.saturating_sub(1) } else { row_index };
            let row_fill = if is_header {
                palette.table_header
            } else {
                match palette.table_band {
                    Some(band) if body_index % 2 == 1 => band,
                    _ => palette.table_fill,
                }
            };
            let text_color = if is_header {
                palette.table_header_text
            } else {
                palette.table_text
            };

            row.iter()
                .map(|cell| {
                    let font = if cell.mono { &typo.mono_font } else { &typo.body_font };
                    TableCellData {
                        text: cell.text.clone(),
                        format: TextFormat::sized(size)
                            .with_color(text_color)
                            .with_bold(cell.bold || is_header)
                            .with_font(font),
                        fill: Some(cell.fill.unwrap_or(row_fill)),
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::content::{ItemStyle, TableCell};
    use crate::deck::theme::{LayoutConfig, Palette, Typography};
    use crate::ooxml::pptx::MutableShape;

    fn theme() -> Theme {
        let c = RGBColor::hex;
        Theme {
            name: "Test".to_string(),
            palette: Palette {
                background: Some(c(0x1a1a2e)),
                title_background: Some(c(0x0f0f23)),
                title: c(0x00d4ff),
                subtitle: c(0xeaeaea),
                headline: c(0x00d4ff),
                body: c(0xeaeaea),
                accent: c(0x00d4ff),
                subtle: c(0xeaeaea),
                emphasis: c(0x7c3aed),
                success: c(0x00ff00),
                code_text: c(0x00d4ff),
                code_background: c(0x2d2d44),
                table_header: c(0x7c3aed),
                table_header_text: c(0xeaeaea),
                table_text: c(0xeaeaea),
                table_fill: c(0x2d2d44),
                table_band: Some(c(0xffffff)),
                border: Some(c(0x7c3aed)),
            },
            typography: Typography::default(),
            layout: LayoutConfig::default(),
        }
    }

    fn shape_y(shape: &MutableShape) -> i64 {
        shape.frame().y
    }

    #[test]
    fn test_render_appends_in_order() {
        let theme = theme();
        let mut pres = MutablePresentation::new();
        let mut builder = SlideBuilder::new(&mut pres, &theme);
        let first = builder.title_slide("Intro", Some("Sub")).unwrap();
        let second = builder.section_slide("Part 1", None).unwrap();
        assert_eq!((first.index, second.index), (0, 1));
        assert_eq!(second.slide_id, 257);

        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slide(0).unwrap().title(), Some("Intro"));
        assert_eq!(pres.slide(0).unwrap().shape_count(), 2);
        assert_eq!(pres.slide(1).unwrap().shape_count(), 1);
    }

    #[test]
    fn test_title_background_precedence() {
        let theme = theme();
        let mut pres = MutablePresentation::new();
        let mut builder = SlideBuilder::new(&mut pres, &theme);
        builder.title_slide("T", None).unwrap();
        builder.content_slide("C", vec![]).unwrap();
        builder
            .render(&SlideSpec::content("O", vec![]).with_background(RGBColor::WHITE))
            .unwrap();

        let bg = |i: usize| pres.slide(i).unwrap().background().cloned();
        assert_eq!(bg(0), Some(SlideBackground::solid(RGBColor::hex(0x0f0f23))));
        assert_eq!(bg(1), Some(SlideBackground::solid(RGBColor::hex(0x1a1a2e))));
        assert_eq!(bg(2), Some(SlideBackground::solid(RGBColor::WHITE)));
    }

    #[test]
    fn test_content_items_follow_cursor() {
        let theme = theme();
        let mut pres = MutablePresentation::new();
        let mut builder = SlideBuilder::new(&mut pres, &theme);
        builder
            .content_slide(
                "Agenda",
                vec![
                    ContentItem::text("Part 1").with_style(ItemStyle::new().bold().spacing(0.4)),
                    ContentItem::bullets(&["a", "b", "c"]),
                    ContentItem::text("Part 2"),
                ],
            )
            .unwrap();

        let slide = pres.slide(0).unwrap();
        let shapes = slide.shapes();
        // headline + three items
        assert_eq!(shapes.len(), 4);
        let inch = |v: f64| crate::common::unit::inch_to_emu(v);
        assert_eq!(shape_y(&shapes[1]), inch(1.2));
        assert_eq!(shape_y(&shapes[2]), inch(1.6));
        assert_eq!(shape_y(&shapes[3]), inch(1.6 + 1.2));
        assert_eq!(shapes[2].text(), "a\nb\nc");
    }

    #[test]
    fn test_empty_title_rejected() {
        let theme = theme();
        let mut pres = MutablePresentation::new();
        let mut builder = SlideBuilder::new(&mut pres, &theme);
        builder.title_slide("ok", None).unwrap();
        let err = builder.content_slide("  ", vec![]).unwrap_err();
        assert!(matches!(err, Error::EmptyTitle { index: 1 }));
        assert_eq!(pres.slide_count(), 1);
    }

    #[test]
    fn test_table_fills() {
        let theme = theme();
        let table = Table::new(
            vec![
                vec![TableCell::new("Mode"), TableCell::new("Behavior")],
                vec![TableCell::new("Normal").mono(), TableCell::new("asks")],
                vec![TableCell::new("Plan"), TableCell::new("read-only").filled(RGBColor::BLACK)],
            ],
            true,
        )
        .unwrap();
        let rows = table_cells(&theme, &table, None);
        assert_eq!(rows[0][0].fill, Some(theme.palette.table_header));
        assert_eq!(rows[0][0].format.bold, Some(true));
        assert_eq!(rows[1][0].fill, Some(theme.palette.table_fill));
        assert_eq!(rows[1][0].format.font.as_deref(), Some("Courier New"));
        assert_eq!(rows[2][0].fill, theme.palette.table_band);
        assert_eq!(rows[2][1].fill, Some(RGBColor::BLACK));
    }
}

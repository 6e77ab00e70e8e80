/// Shape types and XML generation for PPTX slides.
use crate::common::RGBColor;
use crate::common::unit::{pt_to_emu_f64, pt_to_run_size};
use crate::common::xml::escape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use std::fmt::Write as FmtWrite;

use super::super::format::{Frame, Paragraph, ParagraphMarker, TextFormat, VerticalAnchor};

/// Left margin and hanging indent of list paragraphs, in EMUs.
const LIST_INDENT: i64 = 285_750;

/// One cell of a table shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableCellData {
    pub text: String,
    pub format: TextFormat,
    pub fill: Option<RGBColor>,
}

impl TableCellData {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    /// Display name, e.g. "Title 2" or "Table 5"
    pub(crate) name: String,
    pub(crate) frame: Frame,
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        paragraphs: Vec<Paragraph>,
        fill: Option<RGBColor>,
        /// Uniform text inset in EMUs; `None` keeps the PowerPoint default
        inset: Option<i64>,
        anchor: VerticalAnchor,
    },
    Table {
        rows: Vec<Vec<TableCellData>>,
        border: Option<(RGBColor, f64)>,
        first_row: bool,
        band_row: bool,
    },
}

impl MutableShape {
    /// Create a new text box shape.
    pub(crate) fn new_text_box(
        shape_id: u32,
        name: String,
        paragraphs: Vec<Paragraph>,
        frame: Frame,
    ) -> Self {
        Self {
            shape_id,
            name,
            frame,
            shape_type: ShapeType::TextBox {
                paragraphs,
                fill: None,
                inset: None,
                anchor: VerticalAnchor::Top,
            },
        }
    }

    /// Create a new table shape.
    ///
    /// Rows must be rectangular and non-empty.
    pub(crate) fn new_table(
        shape_id: u32,
        rows: Vec<Vec<TableCellData>>,
        frame: Frame,
    ) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(OoxmlError::InvalidShape("table has no cells".to_string()));
        }
        if let Some(idx) = rows.iter().position(|r| r.len() != cols) {
            return Err(OoxmlError::InvalidShape(format!(
                "table row {} has {} cells, expected {}",
                idx,
                rows[idx].len(),
                cols
            )));
        }

        Ok(Self {
            shape_id,
            name: format!("Table {}", shape_id),
            frame,
            shape_type: ShapeType::Table {
                rows,
                border: None,
                first_row: false,
                band_row: false,
            },
        })
    }

    /// Get the shape ID.
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Get the shape frame.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Get the text of the shape; paragraphs and table cells are joined by newlines.
    pub fn text(&self) -> String {
        match &self.shape_type {
            ShapeType::TextBox { paragraphs, .. } => paragraphs
                .iter()
                .map(Paragraph::text)
                .collect::<Vec<_>>()
                .join("\n"),
            ShapeType::Table { rows, .. } => rows
                .iter()
                .flatten()
                .map(|cell| cell.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Builder method: set the background fill (text boxes only).
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeType::TextBox { fill: ref mut f, .. } = self.shape_type {
            *f = Some(color);
        }
        self
    }

    /// Builder method: set a uniform text inset in points (text boxes only).
    pub fn inset(&mut self, points: f64) -> &mut Self {
        if let ShapeType::TextBox { inset: ref mut i, .. } = self.shape_type {
            *i = Some(pt_to_emu_f64(points));
        }
        self
    }

    /// Builder method: set vertical anchoring (text boxes only).
    pub fn anchor(&mut self, anchor: VerticalAnchor) -> &mut Self {
        if let ShapeType::TextBox { anchor: ref mut a, .. } = self.shape_type {
            *a = anchor;
        }
        self
    }

    /// Builder method: draw cell borders with the given color and width in points (tables only).
    pub fn border(&mut self, color: RGBColor, width_pt: f64) -> &mut Self {
        if let ShapeType::Table { border: ref mut b, .. } = self.shape_type {
            *b = Some((color, width_pt));
        }
        self
    }

    /// Builder method: mark the first row as a header and optionally band the rest (tables only).
    pub fn header_row(&mut self, band_rows: bool) -> &mut Self {
        if let ShapeType::Table {
            first_row: ref mut f,
            band_row: ref mut b,
            ..
        } = self.shape_type
        {
            *f = true;
            *b = band_rows;
        }
        self
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox {
                paragraphs,
                fill,
                inset,
                anchor,
            } => self.write_text_box(xml, paragraphs, *fill, *inset, *anchor),
            ShapeType::Table {
                rows,
                border,
                first_row,
                band_row,
            } => self.write_table(xml, rows, *border, *first_row, *band_row),
        }
    }

    fn write_xfrm(&self, xml: &mut String, prefix: &str) -> Result<()> {
        write!(
            xml,
            r#"<{prefix}:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></{prefix}:xfrm>"#,
            self.frame.x, self.frame.y, self.frame.width, self.frame.height
        )?;
        Ok(())
    }

    fn write_text_box(
        &self,
        xml: &mut String,
        paragraphs: &[Paragraph],
        fill: Option<RGBColor>,
        inset: Option<i64>,
        anchor: VerticalAnchor,
    ) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name)
        )?;
        xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        self.write_xfrm(xml, "a")?;
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        match fill {
            Some(color) => write_solid_fill(xml, color)?,
            None => xml.push_str("<a:noFill/>"),
        }
        xml.push_str("</p:spPr>");

        xml.push_str("<p:txBody>");
        xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0""#);
        if let Some(inset) = inset {
            write!(
                xml,
                r#" lIns="{inset}" tIns="{inset}" rIns="{inset}" bIns="{inset}""#
            )?;
        }
        write!(xml, r#" anchor="{}">"#, anchor.as_attr())?;
        xml.push_str("<a:normAutofit/>");
        xml.push_str("</a:bodyPr>");
        xml.push_str("<a:lstStyle/>");

        if paragraphs.is_empty() {
            xml.push_str("<a:p/>");
        }
        for paragraph in paragraphs {
            write_paragraph(xml, paragraph)?;
        }

        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");
        Ok(())
    }

    fn write_table(
        &self,
        xml: &mut String,
        rows: &[Vec<TableCellData>],
        border: Option<(RGBColor, f64)>,
        first_row: bool,
        band_row: bool,
    ) -> Result<()> {
        let cols = rows.first().map(Vec::len).unwrap_or(0).max(1);
        let col_width = self.frame.width / cols as i64;
        let row_height = self.frame.height / rows.len().max(1) as i64;

        xml.push_str("<p:graphicFrame>");
        xml.push_str("<p:nvGraphicFramePr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name)
        )?;
        xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGraphicFramePr>");
        self.write_xfrm(xml, "p")?;

        xml.push_str("<a:graphic>");
        xml.push_str(r#"<a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#);
        xml.push_str("<a:tbl>");
        write!(
            xml,
            r#"<a:tblPr firstRow="{}" bandRow="{}"/>"#,
            u8::from(first_row),
            u8::from(band_row)
        )?;

        xml.push_str("<a:tblGrid>");
        for _ in 0..cols {
            write!(xml, r#"<a:gridCol w="{}"/>"#, col_width)?;
        }
        xml.push_str("</a:tblGrid>");

        for row in rows {
            write!(xml, r#"<a:tr h="{}">"#, row_height)?;
            for cell in row {
                xml.push_str("<a:tc>");
                xml.push_str("<a:txBody><a:bodyPr/><a:lstStyle/>");
                for paragraph in Paragraph::lines(&cell.text, &cell.format) {
                    write_paragraph(xml, &paragraph)?;
                }
                xml.push_str("</a:txBody>");

                xml.push_str("<a:tcPr>");
                if let Some((color, width_pt)) = border {
                    for side in ["lnL", "lnR", "lnT", "lnB"] {
                        write!(xml, r#"<a:{side} w="{}">"#, pt_to_emu_f64(width_pt))?;
                        write_solid_fill(xml, color)?;
                        write!(xml, "</a:{side}>")?;
                    }
                }
                if let Some(fill) = cell.fill {
                    write_solid_fill(xml, fill)?;
                }
                xml.push_str("</a:tcPr>");
                xml.push_str("</a:tc>");
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl>");
        xml.push_str("</a:graphicData>");
        xml.push_str("</a:graphic>");
        xml.push_str("</p:graphicFrame>");
        Ok(())
    }
}

fn write_solid_fill(xml: &mut String, color: RGBColor) -> Result<()> {
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        color.to_hex()
    )?;
    Ok(())
}

/// Write run properties; `element` is `a:rPr` or `a:endParaRPr`.
fn write_run_props(xml: &mut String, element: &str, format: &TextFormat) -> Result<()> {
    write!(xml, r#"<{element} lang="en-US""#)?;
    if let Some(size) = format.size {
        write!(xml, r#" sz="{}""#, pt_to_run_size(size))?;
    }
    if let Some(bold) = format.bold {
        write!(xml, r#" b="{}""#, u8::from(bold))?;
    }
    if let Some(true) = format.italic {
        xml.push_str(r#" i="1""#);
    }
    xml.push_str(r#" dirty="0">"#);

    // Fill must precede the typeface elements
    if let Some(color) = format.color {
        write_solid_fill(xml, color)?;
    }
    if let Some(ref font) = format.font {
        let font = escape_xml(font);
        write!(xml, r#"<a:latin typeface="{font}"/><a:cs typeface="{font}"/>"#)?;
    }

    write!(xml, "</{element}>")?;
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");

    if paragraph.align.is_some() || paragraph.marker.is_some() {
        xml.push_str("<a:pPr");
        if paragraph.marker.is_some() {
            write!(xml, r#" marL="{}" indent="-{}""#, LIST_INDENT, LIST_INDENT)?;
        }
        if let Some(align) = paragraph.align {
            write!(xml, r#" algn="{}""#, align.as_attr())?;
        }
        xml.push('>');
        match paragraph.marker {
            Some(ParagraphMarker::Bullet(ch)) => {
                let mut buf = [0u8; 4];
                write!(
                    xml,
                    r#"<a:buFont typeface="Arial"/><a:buChar char="{}"/>"#,
                    escape_xml(ch.encode_utf8(&mut buf))
                )?;
            },
            Some(ParagraphMarker::Numbered) => {
                xml.push_str(r#"<a:buFont typeface="+mj-lt"/><a:buAutoNum type="arabicPeriod"/>"#);
            },
            None => {},
        }
        xml.push_str("</a:pPr>");
    }

    let mut last_format = None;
    for run in &paragraph.runs {
        last_format = Some(&run.format);
        if run.text.is_empty() {
            continue;
        }
        xml.push_str("<a:r>");
        write_run_props(xml, "a:rPr", &run.format)?;
        write!(xml, "<a:t>{}</a:t>", escape_xml(&run.text))?;
        xml.push_str("</a:r>");
    }

    // Keeps empty lines (e.g. inside code blocks) at the right height
    if let Some(format) = last_format {
        write_run_props(xml, "a:endParaRPr", format)?;
    }

    xml.push_str("</a:p>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::Alignment;

    fn render(shape: &MutableShape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_text_box_xml() {
        let format = TextFormat::sized(44.0)
            .with_bold(true)
            .with_color(RGBColor::hex(0x00d4ff));
        let mut shape = MutableShape::new_text_box(
            2,
            "Title 2".to_string(),
            vec![Paragraph::plain("Tom & Jerry", format).aligned(Alignment::Center)],
            Frame::from_inches(0.5, 2.5, 9.0, 1.0),
        );
        shape.fill(RGBColor::hex(0x2d2d44));

        let xml = render(&shape);
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Title 2"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr">"#));
        assert!(xml.contains(r#"sz="4400" b="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="00D4FF"/>"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="2D2D44"/></a:solidFill></p:spPr>"#));
        assert!(xml.contains("<a:t>Tom &amp; Jerry</a:t>"));
    }

    #[test]
    fn test_bullet_and_numbered_markers() {
        let fmt = TextFormat::sized(18.0);
        let shape = MutableShape::new_text_box(
            3,
            "List 3".to_string(),
            vec![
                Paragraph::plain("one", fmt.clone()).with_marker(ParagraphMarker::Bullet('•')),
                Paragraph::plain("two", fmt).with_marker(ParagraphMarker::Numbered),
            ],
            Frame::from_inches(0.5, 1.2, 9.0, 0.8),
        );
        let xml = render(&shape);
        assert!(xml.contains(r#"<a:buChar char="•"/>"#));
        assert!(xml.contains(r#"<a:buAutoNum type="arabicPeriod"/>"#));
        assert_eq!(xml.matches(r#"marL="285750""#).count(), 2);
    }

    #[test]
    fn test_empty_line_keeps_paragraph() {
        let fmt = TextFormat::sized(14.0).with_font("Courier New");
        let shape = MutableShape::new_text_box(
            4,
            "Code 4".to_string(),
            Paragraph::lines("a\n\nb", &fmt),
            Frame::from_inches(0.5, 1.2, 9.0, 1.5),
        );
        let xml = render(&shape);
        assert_eq!(xml.matches("<a:p>").count(), 3);
        assert_eq!(xml.matches("<a:r>").count(), 2);
        assert!(xml.contains(r#"<a:latin typeface="Courier New"/>"#));
    }

    #[test]
    fn test_table_xml() {
        let mut header = TableCellData::new("Mode");
        header.fill = Some(RGBColor::hex(0x7c3aed));
        header.format.bold = Some(true);
        let rows = vec![
            vec![header, TableCellData::new("Behavior")],
            vec![TableCellData::new("Normal"), TableCellData::new("Claude asks")],
        ];
        let mut shape =
            MutableShape::new_table(5, rows, Frame::from_inches(0.5, 1.2, 9.0, 1.0)).unwrap();
        shape.border(RGBColor::hex(0x7c3aed), 1.0).header_row(true);

        let xml = render(&shape);
        assert!(xml.starts_with("<p:graphicFrame>"));
        assert!(xml.contains(r#"<a:tblPr firstRow="1" bandRow="1"/>"#));
        assert_eq!(xml.matches("<a:gridCol").count(), 2);
        assert_eq!(xml.matches("<a:tr ").count(), 2);
        assert_eq!(xml.matches(r#"<a:lnL w="12700">"#).count(), 4);
        assert!(xml.contains("<a:t>Behavior</a:t>"));
        assert_eq!(shape.text(), "Mode\nBehavior\nNormal\nClaude asks");
    }

    #[test]
    fn test_ragged_table_rejected() {
        let rows = vec![
            vec![TableCellData::new("a"), TableCellData::new("b")],
            vec![TableCellData::new("c")],
        ];
        let err = MutableShape::new_table(2, rows, Frame::new(0, 0, 1, 1));
        assert!(matches!(err, Err(OoxmlError::InvalidShape(_))));
        assert!(MutableShape::new_table(2, Vec::new(), Frame::new(0, 0, 1, 1)).is_err());
    }
}

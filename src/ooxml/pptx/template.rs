//! Presentation template parts.
//!
//! Every generated deck shares one slide master, one blank layout and one
//! theme. Slides carry their own backgrounds and shapes, so these parts only
//! hold the minimum structure PowerPoint requires.

use crate::common::xml::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const PML_NAMESPACES: &str = concat!(
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
);

/// Empty group-shape header that opens every `p:spTree`.
pub(crate) const SP_TREE_GROUP: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
);

/// Identifier of the single layout inside the master's `p:sldLayoutIdLst`.
const SLIDE_LAYOUT_ID: u32 = 2_147_483_649;

/// Generate slideMaster1.xml.
///
/// # Arguments
/// * `layout_rel_id` - relationship ID of the blank layout from the master part
pub fn slide_master_xml(layout_rel_id: &str) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    xml.push_str("<p:sldMaster ");
    xml.push_str(PML_NAMESPACES);
    xml.push('>');
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    xml.push_str(SP_TREE_GROUP);
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" "#,
        r#"accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" "#,
        r#"accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    ));
    xml.push_str(&format!(
        r#"<p:sldLayoutIdLst><p:sldLayoutId id="{}" r:id="{}"/></p:sldLayoutIdLst>"#,
        SLIDE_LAYOUT_ID, layout_rel_id
    ));
    xml.push_str("</p:sldMaster>");
    xml
}

/// Generate slideLayout1.xml (Blank).
pub fn blank_layout_xml() -> String {
    let mut xml = String::with_capacity(768);
    xml.push_str(XML_DECL);
    xml.push_str("<p:sldLayout ");
    xml.push_str(PML_NAMESPACES);
    xml.push_str(r#" type="blank" preserve="1">"#);
    xml.push_str(r#"<p:cSld name="Blank"><p:spTree>"#);
    xml.push_str(SP_TREE_GROUP);
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    xml
}

/// Generate theme1.xml.
///
/// # Arguments
/// * `name` - theme name shown by presentation software
/// * `major_font` / `minor_font` - heading and body latin typefaces
pub fn theme_xml(name: &str, major_font: &str, minor_font: &str) -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(
        r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="{}">"#,
        escape_xml(name)
    ));
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="Office">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    for (slot, rgb) in [
        ("dk2", "44546A"),
        ("lt2", "E7E6E6"),
        ("accent1", "4472C4"),
        ("accent2", "ED7D31"),
        ("accent3", "A5A5A5"),
        ("accent4", "FFC000"),
        ("accent5", "5B9BD5"),
        ("accent6", "70AD47"),
        ("hlink", "0563C1"),
        ("folHlink", "954F72"),
    ] {
        xml.push_str(&format!(r#"<a:{slot}><a:srgbClr val="{rgb}"/></a:{slot}>"#));
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="Office">"#);
    xml.push_str(&format!(
        r#"<a:majorFont><a:latin typeface="{}"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
        escape_xml(major_font)
    ));
    xml.push_str(&format!(
        r#"<a:minorFont><a:latin typeface="{}"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
        escape_xml(minor_font)
    ));
    xml.push_str("</a:fontScheme>");

    let ph_fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    xml.push_str(r#"<a:fmtScheme name="Office"><a:fillStyleLst>"#);
    for _ in 0..3 {
        xml.push_str(ph_fill);
    }
    xml.push_str("</a:fillStyleLst><a:lnStyleLst>");
    for width in [6350, 12700, 19050] {
        xml.push_str(&format!(r#"<a:ln w="{width}">{ph_fill}</a:ln>"#));
    }
    xml.push_str("</a:lnStyleLst><a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst><a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(ph_fill);
    }
    xml.push_str("</a:bgFillStyleLst></a:fmtScheme>");

    xml.push_str("</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>");
    xml
}

/// Generate docProps/core.xml.
pub fn core_props_xml(
    title: &str,
    subject: &str,
    author: &str,
    created: DateTime<Utc>,
) -> String {
    let timestamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        r#"<cp:coreProperties "#,
        r#"xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" "#,
        r#"xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" "#,
        r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
    xml.push_str(&format!("<dc:subject>{}</dc:subject>", escape_xml(subject)));
    xml.push_str(&format!("<dc:creator>{}</dc:creator>", escape_xml(author)));
    xml.push_str(&format!(
        "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
        escape_xml(author)
    ));
    xml.push_str("<cp:revision>1</cp:revision>");
    xml.push_str(&format!(
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:created>"#
    ));
    xml.push_str(&format!(
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:modified>"#
    ));
    xml.push_str("</cp:coreProperties>");
    xml
}

/// Generate docProps/app.xml.
pub fn app_props_xml(slide_count: usize) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECL);
    xml.push_str(concat!(
        r#"<Properties "#,
        r#"xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    ));
    xml.push_str(concat!("<Application>deckgen ", env!("CARGO_PKG_VERSION"), "</Application>"));
    xml.push_str(&format!("<Slides>{slide_count}</Slides>"));
    xml.push_str("</Properties>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_master_references_layout() {
        let xml = slide_master_xml("rId1");
        assert!(xml.starts_with(XML_DECL));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.ends_with("</p:sldMaster>"));
    }

    #[test]
    fn test_theme_fonts_escaped() {
        let xml = theme_xml("Neon & Dark", "Arial", "Courier New");
        assert!(xml.contains(r#"name="Neon &amp; Dark""#));
        assert!(xml.contains(r#"<a:latin typeface="Courier New"/>"#));
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
    }

    #[test]
    fn test_core_props_timestamp() {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let xml = core_props_xml("AI Demo", "Claude Code + GitHub Actions", "Claude Code", created);
        assert!(xml.contains("<dc:title>AI Demo</dc:title>"));
        assert!(xml.contains("2024-01-15T09:30:00Z"));
    }

    #[test]
    fn test_app_props_slide_count() {
        assert!(app_props_xml(41).contains("<Slides>41</Slides>"));
    }
}

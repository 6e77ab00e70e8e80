/// Package assembly for PowerPoint presentations.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackURI, PackageWriter, Part};
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::MutablePresentation;
use chrono::Utc;
use std::path::Path;

/// Serializes a [`MutablePresentation`] into a .pptx package.
///
/// # Examples
///
/// ```rust,no_run
/// use deckgen::ooxml::pptx::{MutablePresentation, PresentationWriter};
///
/// let mut pres = MutablePresentation::new();
/// pres.add_slide().set_title("Intro");
/// PresentationWriter::write("intro.pptx", &pres)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PresentationWriter;

impl PresentationWriter {
    /// Write the presentation to a file.
    pub fn write<P: AsRef<Path>>(path: P, pres: &MutablePresentation) -> Result<()> {
        let package = Self::to_package(pres)?;
        PackageWriter::write(path, &package)?;
        Ok(())
    }

    /// Serialize the presentation to ZIP bytes.
    pub fn to_bytes(pres: &MutablePresentation) -> Result<Vec<u8>> {
        let package = Self::to_package(pres)?;
        Ok(PackageWriter::to_bytes(&package)?)
    }

    /// Build the OPC package holding every part of the presentation.
    pub fn to_package(pres: &MutablePresentation) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();
        let metadata = pres.metadata();

        let pres_uri = PackURI::new("/ppt/presentation.xml")?;
        let master_uri = PackURI::new("/ppt/slideMasters/slideMaster1.xml")?;
        let layout_uri = PackURI::new("/ppt/slideLayouts/slideLayout1.xml")?;
        let theme_uri = PackURI::new("/ppt/theme/theme1.xml")?;
        let core_uri = PackURI::new("/docProps/core.xml")?;
        let app_uri = PackURI::new("/docProps/app.xml")?;

        // Package-level relationships
        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

        // Presentation part; the blob is generated once slide rIds are known
        let mut pres_part = Part::new(pres_uri, ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rid = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);

        let mut slide_parts = Vec::with_capacity(pres.slide_count());
        let mut slide_rids = Vec::with_capacity(pres.slide_count());
        for (index, slide) in pres.slides().enumerate() {
            let slide_uri = PackURI::new(format!("/ppt/slides/slide{}.xml", index + 1))?;
            slide_rids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));

            let mut slide_part = Part::new(slide_uri, ct::PML_SLIDE, slide.to_xml()?.into_bytes());
            slide_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            slide_parts.push(slide_part);
        }
        pres_part.relate_to(&theme_uri, rt::THEME);
        pres_part.set_blob(
            pres.generate_presentation_xml(&master_rid, &slide_rids)?
                .into_bytes(),
        );
        package.add_part(pres_part)?;

        for slide_part in slide_parts {
            package.add_part(slide_part)?;
        }

        // Master: the layout relationship comes first so it matches the sldLayoutIdLst entry
        let mut master_part = Part::new(master_uri.clone(), ct::PML_SLIDE_MASTER, Vec::new());
        let layout_rid = master_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        master_part.relate_to(&theme_uri, rt::THEME);
        master_part.set_blob(template::slide_master_xml(&layout_rid).into_bytes());
        package.add_part(master_part)?;

        let mut layout_part = Part::new(
            layout_uri,
            ct::PML_SLIDE_LAYOUT,
            template::blank_layout_xml().into_bytes(),
        );
        layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);
        package.add_part(layout_part)?;

        package.add_part(Part::new(
            theme_uri,
            ct::OFC_THEME,
            template::theme_xml(
                &metadata.theme_name,
                &metadata.major_font,
                &metadata.minor_font,
            )
            .into_bytes(),
        ))?;

        package.add_part(Part::new(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(
                &metadata.title,
                &metadata.subject,
                &metadata.author,
                Utc::now(),
            )
            .into_bytes(),
        ))?;
        package.add_part(Part::new(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(pres.slide_count()).into_bytes(),
        ))?;

        Ok(package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::{Frame, Paragraph, TextFormat};
    use std::io::{Cursor, Read};

    fn sample() -> MutablePresentation {
        let mut pres = MutablePresentation::new();
        pres.metadata_mut().title = "Sample".to_string();
        for title in ["One", "Two", "Three"] {
            let slide = pres.add_slide();
            slide.set_title(title);
            slide.add_text_box(
                vec![Paragraph::plain(title, TextFormat::sized(40.0))],
                Frame::from_inches(0.5, 0.3, 9.0, 0.8),
            );
        }
        pres
    }

    #[test]
    fn test_package_parts() {
        let package = PresentationWriter::to_package(&sample()).unwrap();
        // presentation, 3 slides, master, layout, theme, core, app
        assert_eq!(package.part_count(), 9);
        assert!(package.contains_part(&PackURI::new("/ppt/slides/slide3.xml").unwrap()));
        assert_eq!(package.rels().len(), 3);
    }

    #[test]
    fn test_presentation_rels_order() {
        let package = PresentationWriter::to_package(&sample()).unwrap();
        let pres_part = package.iter_parts().next().unwrap();
        let xml = String::from_utf8(pres_part.blob().to_vec()).unwrap();
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="258" r:id="rId4"/>"#));
        assert_eq!(pres_part.rels().get("rId5").unwrap().reltype(), rt::THEME);
    }

    #[test]
    fn test_to_bytes_is_zip() {
        let bytes = PresentationWriter::to_bytes(&sample()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut slide = String::new();
        archive
            .by_name("ppt/slides/slide2.xml")
            .unwrap()
            .read_to_string(&mut slide)
            .unwrap();
        assert!(slide.contains("<a:t>Two</a:t>"));
        let names: Vec<_> = archive.file_names().collect();
        assert!(names.contains(&"[Content_Types].xml"));
        assert!(names.contains(&"ppt/slides/_rels/slide1.xml.rels"));
    }
}

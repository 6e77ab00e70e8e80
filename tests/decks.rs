//! End-to-end: render both built-in decks, write them, read the ZIP back.

use deckgen::deck::{Deck, DeckSerializer};
use deckgen::decks::{ai_demo, workflow};
use pretty_assertions::assert_eq;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

fn read_entry(archive: &mut ZipArchive<File>, name: &str) -> String {
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing {name}"))
        .read_to_string(&mut content)
        .unwrap();
    content
}

fn slide_entries(archive: &ZipArchive<File>) -> usize {
    archive
        .file_names()
        .filter(|name| {
            name.strip_prefix("ppt/slides/slide")
                .and_then(|rest| rest.strip_suffix(".xml"))
                .is_some_and(|n| n.parse::<usize>().is_ok())
        })
        .count()
}

/// Text of the first `<a:t>` element.
fn first_text(xml: &str) -> &str {
    let start = xml.find("<a:t>").expect("no text run") + "<a:t>".len();
    let end = xml[start..].find("</a:t>").expect("unterminated run") + start;
    &xml[start..end]
}

fn check_deck(deck: Deck, path: &Path, expected_slides: usize) {
    assert_eq!(deck.slide_count(), expected_slides);
    let first_title = deck.slides[0].title.clone();
    let pres = deck.render().unwrap();
    DeckSerializer::write(&pres, path).unwrap();

    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    assert_eq!(slide_entries(&archive), expected_slides);

    let slide1 = read_entry(&mut archive, "ppt/slides/slide1.xml");
    assert_eq!(first_text(&slide1), first_title);

    let app = read_entry(&mut archive, "docProps/app.xml");
    assert!(app.contains(&format!("<Slides>{expected_slides}</Slides>")));

    let content_types = read_entry(&mut archive, "[Content_Types].xml");
    assert_eq!(
        content_types.matches("presentationml.slide+xml").count(),
        expected_slides
    );

    let pres_xml = read_entry(&mut archive, "ppt/presentation.xml");
    assert_eq!(pres_xml.matches("<p:sldId ").count(), expected_slides);
}

#[test]
fn workflow_deck_has_17_slides() {
    let dir = tempfile::tempdir().unwrap();
    check_deck(workflow::deck().unwrap(), &dir.path().join("workflow.pptx"), 17);
}

#[test]
fn ai_demo_deck_has_41_slides() {
    let dir = tempfile::tempdir().unwrap();
    check_deck(ai_demo::deck().unwrap(), &dir.path().join("ai-demo.pptx"), 41);
}

#[test]
fn workflow_slides_use_theme_backgrounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bg.pptx");
    let pres = workflow::deck().unwrap().render().unwrap();
    DeckSerializer::write(&pres, &path).unwrap();

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    assert!(read_entry(&mut archive, "ppt/slides/slide1.xml").contains(r#"<a:srgbClr val="0F0F23"/>"#));
    assert!(read_entry(&mut archive, "ppt/slides/slide2.xml").contains(r#"<a:srgbClr val="1A1A2E"/>"#));
}

#[tokio::test]
async fn async_write_produces_same_slide_count() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("async.pptx");
    let pres = ai_demo::deck().unwrap().render().unwrap();
    let written = DeckSerializer::write_async(pres, &target).await.unwrap();
    assert_eq!(written, target);

    let archive = ZipArchive::new(File::open(&written).unwrap()).unwrap();
    assert_eq!(slide_entries(&archive), 41);
}

use scriptforge_core::{Brief, PageRange, SectionCatalog, SectionState};
use scriptforge_document::{DocxRenderer, assemble_document, write_document};
use scriptforge_interface::DocumentRenderer;
use std::io::{Cursor, Read};

fn brief() -> Brief {
    Brief::builder()
        .title("Nova")
        .genre("sci-fi")
        .plot("A colony ship wakes early & nobody knows why.")
        .main_characters("Ava")
        .tone("dramatic")
        .setting("Mars")
        .build()
        .unwrap()
}

fn sections() -> Vec<SectionState> {
    let catalog = SectionCatalog::screenplay();
    catalog
        .sections()
        .iter()
        .map(|spec| {
            let mut state = SectionState::pending(spec);
            state.begin().unwrap();
            if *spec.ordinal() == 2 {
                state.fail("HTTP 503").unwrap();
            } else {
                state
                    .complete(format!("INT. DECK {} - NIGHT\nAVA\n(whispering)\nWake up.", spec.ordinal()))
                    .unwrap();
            }
            state
        })
        .collect()
}

fn read_entry(bytes: &[u8], name: &str) -> anyhow::Result<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut file = archive.by_name(name)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

#[test]
fn test_assembly_keeps_every_section() {
    let doc = assemble_document(&brief(), &sections());

    assert_eq!(doc.sections().len(), 5);
    assert_eq!(*doc.sections()[0].page_range(), PageRange::new(1, 24));
    assert_eq!(doc.sections()[0].blocks().len(), 4);
    assert_eq!(doc.sections()[1].blocks().len(), 1);
    assert_eq!(doc.block_count(), 4 * 4 + 1);
}

#[test]
fn test_package_has_required_parts() -> anyhow::Result<()> {
    let doc = assemble_document(&brief(), &sections());
    let bytes = DocxRenderer::new().render(&doc)?;

    let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice()))?;
    let mut names: Vec<&str> = archive.file_names().collect();
    names.sort_unstable();
    assert_eq!(
        names,
        [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/_rels/document.xml.rels",
            "word/document.xml",
            "word/styles.xml",
        ]
    );
    Ok(())
}

#[test]
fn test_document_part_contents() -> anyhow::Result<()> {
    let doc = assemble_document(&brief(), &sections());
    let bytes = DocxRenderer::new().render(&doc)?;
    let xml = read_entry(&bytes, "word/document.xml")?;

    assert!(xml.contains(">NOVA<"));
    assert!(xml.contains("A sci-fi Screenplay"));
    assert!(xml.contains("Main Characters: Ava"));
    assert!(xml.contains("PLOT SUMMARY"));
    assert!(xml.contains("early &amp; nobody"));
    assert!(xml.contains(r#"<w:jc w:val="both"/>"#));
    assert!(xml.contains("<w:pageBreakBefore/>"));
    assert!(xml.contains("OPENING &amp; SETUP (Pages 1-24)"));
    assert!(xml.contains("RESOLUTION (Pages 97-120)"));
    assert!(xml.contains(r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440""#));
    assert!(xml.contains(r#"<w:ind w:left="1800" w:right="0"/>"#));
    assert_eq!(xml.matches(r#"<w:pStyle w:val="Heading2"/>"#).count(), 5);
    Ok(())
}

#[test]
fn test_write_document_uses_title() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let doc = assemble_document(&brief(), &sections());

    let path = write_document(&DocxRenderer::new(), &doc, dir.path())?;

    assert_eq!(path.file_name().unwrap(), "Nova.docx");
    let bytes = std::fs::read(&path)?;
    assert!(read_entry(&bytes, "word/styles.xml")?.contains("Heading2"));
    Ok(())
}

#[test]
fn test_write_document_untitled_fallback() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let doc = assemble_document(&Brief::default(), &[]);

    let path = write_document(&DocxRenderer::new(), &doc, dir.path())?;
    assert_eq!(path.file_name().unwrap(), "Movie_Script.docx");
    Ok(())
}

#[test]
fn test_write_document_reports_io_failure() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let doc = assemble_document(&brief(), &sections());

    let err = write_document(&DocxRenderer::new(), &doc, &dir.path().join("missing")).unwrap_err();
    assert!(err.to_string().contains("Failed to write document file"));
    Ok(())
}

#[test]
fn test_control_characters_are_dropped_from_text() -> anyhow::Result<()> {
    let catalog = SectionCatalog::screenplay();
    let spec = catalog.get(1).unwrap();
    let mut state = SectionState::pending(spec);
    state.begin()?;
    state.complete("AVA\nWake\u{0008} up.\u{000C}\tNow\u{001B}!")?;

    let doc = assemble_document(&brief(), &[state]);
    let bytes = DocxRenderer::new().render(&doc)?;
    let xml = read_entry(&bytes, "word/document.xml")?;

    assert!(xml.contains("Wake up.\tNow!"));
    assert!(
        !xml.chars()
            .any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
    );
    Ok(())
}

//! WordprocessingML (`.docx`) rendering.

use quick_xml::escape::escape;
use scriptforge_core::{BlockKind, Brief, IndentLevel, LayoutBlock, ScreenplayDocument};
use scriptforge_error::{DocumentError, DocumentErrorKind, ScriptforgeResult};
use scriptforge_interface::DocumentRenderer;
use std::io::{Cursor, Write};
use tracing::{debug, instrument};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// One inch in twentieths of a point.
const INCH: u32 = 1440;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Courier New" w:hAnsi="Courier New" w:cs="Courier New"/><w:sz w:val="24"/><w:szCs w:val="24"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:uiPriority w:val="9"/><w:qFormat/><w:pPr><w:keepNext/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/></w:rPr></w:style></w:styles>"#;

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Center,
    Justify,
}

/// A single-run paragraph.
#[derive(Debug, Clone, Default)]
struct Paragraph<'a> {
    text: &'a str,
    bold: bool,
    italic: bool,
    caps: bool,
    /// Half-points
    size: u32,
    align: Option<Align>,
    indent_left: u32,
    indent_right: u32,
    before: u32,
    after: u32,
    heading: bool,
    page_break_before: bool,
}

impl<'a> Paragraph<'a> {
    fn new(text: &'a str, size: u32) -> Self {
        Self {
            text,
            size,
            ..Self::default()
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn centered(mut self) -> Self {
        self.align = Some(Align::Center);
        self
    }

    fn spacing(mut self, before: u32, after: u32) -> Self {
        self.before = before;
        self.after = after;
        self
    }

    fn write_xml(&self, out: &mut String) {
        out.push_str("<w:p><w:pPr>");
        if self.heading {
            out.push_str(r#"<w:pStyle w:val="Heading2"/>"#);
        }
        if self.page_break_before {
            out.push_str("<w:pageBreakBefore/>");
        }
        out.push_str(&format!(
            r#"<w:spacing w:before="{}" w:after="{}"/>"#,
            self.before, self.after
        ));
        if self.indent_left > 0 || self.indent_right > 0 {
            out.push_str(&format!(
                r#"<w:ind w:left="{}" w:right="{}"/>"#,
                self.indent_left, self.indent_right
            ));
        }
        match self.align {
            Some(Align::Center) => out.push_str(r#"<w:jc w:val="center"/>"#),
            Some(Align::Justify) => out.push_str(r#"<w:jc w:val="both"/>"#),
            None => {}
        }
        out.push_str("</w:pPr><w:r><w:rPr>");
        if self.bold {
            out.push_str("<w:b/>");
        }
        if self.italic {
            out.push_str("<w:i/>");
        }
        if self.caps {
            out.push_str("<w:caps/>");
        }
        out.push_str(&format!(
            r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/></w:rPr>"#,
            self.size
        ));
        out.push_str(&format!(
            r#"<w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            xml_text(self.text)
        ));
    }
}

/// Escape `text` for an XML text node, dropping control characters XML 1.0 forbids.
fn xml_text(text: &str) -> String {
    let allowed: String = text
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect();
    escape(allowed.as_str()).into_owned()
}

/// Renders a screenplay as an Office Open XML word-processing document.
///
/// Letter-sized pages with one-inch margins. A title page built from the brief is
/// followed by one centered heading per section and one paragraph per block.
///
/// # Examples
///
/// ```
/// use scriptforge_core::{Brief, ScreenplayDocument};
/// use scriptforge_document::DocxRenderer;
/// use scriptforge_interface::DocumentRenderer;
///
/// let doc = ScreenplayDocument::new(Brief::default(), Vec::new());
/// let bytes = DocxRenderer::new().render(&doc).unwrap();
/// assert_eq!(&bytes[..2], b"PK");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocxRenderer;

impl DocxRenderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }

    /// Build `word/document.xml`.
    pub fn document_xml(&self, doc: &ScreenplayDocument) -> String {
        let mut body = String::new();
        Self::title_page(doc.brief(), &mut body);

        for section in doc.sections() {
            let heading = format!(
                "{} (Pages {})",
                section.title().to_uppercase(),
                section.page_range()
            );
            let mut para = Paragraph::new(&heading, 24).bold().centered().spacing(480, 480);
            para.heading = true;
            para.write_xml(&mut body);

            for block in section.blocks() {
                Self::block_paragraph(block).write_xml(&mut body);
            }
        }

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="{INCH}" w:right="{INCH}" w:bottom="{INCH}" w:left="{INCH}" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr></w:body></w:document>"#
        )
    }

    fn title_page(brief: &Brief, body: &mut String) {
        let title = brief.title().to_uppercase();
        let subtitle = format!("A {} Screenplay", brief.genre());
        Paragraph::new(&title, 32).bold().centered().spacing(0, 480).write_xml(body);
        Paragraph::new(&subtitle, 24).centered().spacing(0, 960).write_xml(body);

        let details = [
            format!("Genre: {}", brief.genre()),
            format!("Setting: {}", brief.setting()),
            format!("Main Characters: {}", brief.main_characters()),
            format!("Tone: {}", brief.tone()),
        ];
        let last = details.len() - 1;
        for (index, line) in details.iter().enumerate() {
            let after = if index == last { 480 } else { 240 };
            Paragraph::new(line, 20).centered().spacing(0, after).write_xml(body);
        }

        Paragraph::new("PLOT SUMMARY", 24).bold().centered().spacing(0, 240).write_xml(body);

        let mut plot = Paragraph::new(brief.plot(), 20).spacing(0, 960);
        plot.align = Some(Align::Justify);
        plot.write_xml(body);

        let mut page_break = Paragraph::new("", 24);
        page_break.page_break_before = true;
        page_break.write_xml(body);
    }

    fn block_paragraph(block: &LayoutBlock) -> Paragraph<'_> {
        let style = block.style();
        let size = match block.kind() {
            BlockKind::SceneHeading | BlockKind::CharacterCue => 24,
            _ => 22,
        };
        let (before, after) = match block.kind() {
            BlockKind::Blank => (0, 120),
            BlockKind::SceneHeading => (240, 240),
            BlockKind::CharacterCue => (240, 120),
            BlockKind::Parenthetical | BlockKind::Dialogue => (0, 120),
            BlockKind::Action => (0, 240),
        };
        let indent = match style.indent {
            IndentLevel::None => 0,
            IndentLevel::Dialogue => INCH,
            IndentLevel::Parenthetical => 1800,
            IndentLevel::Speaker => 2160,
        };

        let mut para = Paragraph::new(block.text(), size).spacing(before, after);
        para.bold = style.bold;
        para.italic = style.italic;
        para.caps = style.all_caps;
        para.indent_left = indent;
        para.indent_right = if style.indent_right { indent } else { 0 };
        para
    }

    fn package(&self, document_xml: &str) -> ScriptforgeResult<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        let entries = [
            ("[Content_Types].xml", CONTENT_TYPES),
            ("_rels/.rels", PACKAGE_RELS),
            ("word/document.xml", document_xml),
            ("word/styles.xml", STYLES),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS),
        ];

        for (entry, content) in entries {
            let package_error = |message: String| {
                DocumentError::new(DocumentErrorKind::PackageWrite {
                    entry: entry.to_string(),
                    message,
                })
            };
            zip.start_file(entry, options)
                .map_err(|e| package_error(e.to_string()))?;
            zip.write_all(content.as_bytes())
                .map_err(|e| package_error(e.to_string()))?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| DocumentError::new(DocumentErrorKind::Finalize(e.to_string())))?;
        Ok(cursor.into_inner())
    }
}

impl DocumentRenderer for DocxRenderer {
    #[instrument(skip(self, doc), fields(sections = doc.sections().len(), blocks = doc.block_count()))]
    fn render(&self, doc: &ScreenplayDocument) -> ScriptforgeResult<Vec<u8>> {
        let document_xml = self.document_xml(doc);
        debug!(xml_len = document_xml.len(), "Built document part");
        self.package(&document_xml)
    }

    fn extension(&self) -> &'static str {
        "docx"
    }
}

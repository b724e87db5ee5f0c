//! From section states to a rendered file.

use crate::classify_section;
use scriptforge_core::{Brief, DocumentSection, ScreenplayDocument, SectionState};
use scriptforge_error::{DocumentError, DocumentErrorKind, ScriptforgeResult};
use scriptforge_interface::DocumentRenderer;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Classify every section and pair the result with the brief.
///
/// Sections are taken in the order given, whatever their status. A section without
/// content yields a single blank block.
pub fn assemble_document(brief: &Brief, sections: &[SectionState]) -> ScreenplayDocument {
    let sections = sections
        .iter()
        .map(|state| {
            let blocks = classify_section(state.content());
            debug!(ordinal = state.ordinal(), blocks = blocks.len(), "Classified section");
            DocumentSection::new(state.title().clone(), *state.page_range(), blocks)
        })
        .collect();

    ScreenplayDocument::new(brief.clone(), sections)
}

/// Render `doc` and write it to `{title}.{extension}` inside `dir`.
///
/// Returns the path written.
#[instrument(skip(renderer, doc), fields(extension = renderer.extension(), dir = %dir.display()))]
pub fn write_document<R>(renderer: &R, doc: &ScreenplayDocument, dir: &Path) -> ScriptforgeResult<PathBuf>
where
    R: DocumentRenderer + ?Sized,
{
    let bytes = renderer.render(doc)?;
    let path = dir.join(doc.brief().export_filename(renderer.extension()));

    std::fs::write(&path, &bytes).map_err(|e| {
        DocumentError::new(DocumentErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    info!(path = %path.display(), bytes = bytes.len(), "Wrote screenplay document");
    Ok(path)
}

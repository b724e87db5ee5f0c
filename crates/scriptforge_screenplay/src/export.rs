//! Plain-text export.

use crate::ScreenplayRun;
use scriptforge_core::SectionState;
use scriptforge_error::{ScreenplayError, ScreenplayErrorKind, ScriptforgeResult};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Join raw section content with a blank line, regardless of status.
///
/// Sections without content contribute empty strings, so separators are kept.
pub fn join_sections(sections: &[SectionState]) -> String {
    sections
        .iter()
        .map(|s| s.content().as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Write the run's plain text to `{title}.txt` inside `dir`.
///
/// Returns the path written.
#[instrument(skip(run), fields(run_id = %run.id(), dir = %dir.display()))]
pub fn write_plain_text(run: &ScreenplayRun, dir: &Path) -> ScriptforgeResult<PathBuf> {
    let path = dir.join(run.brief().export_filename("txt"));

    std::fs::write(&path, run.plain_text()).map_err(|e| {
        ScreenplayError::new(ScreenplayErrorKind::ExportWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;

    info!(path = %path.display(), "Wrote plain-text screenplay");
    Ok(path)
}

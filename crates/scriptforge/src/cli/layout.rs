//! Layout classification command handler.

use super::OutputFormat;
use scriptforge::{BlockKind, JsonError, ScreenplayError, ScreenplayErrorKind, ScriptforgeResult, classify_section};
use std::path::Path;
use strum::IntoEnumIterator;

/// Classify every line of `file` and print the resulting blocks.
#[tracing::instrument(skip(format), fields(file = %file.display()))]
pub fn show_layout(file: &Path, format: OutputFormat) -> ScriptforgeResult<()> {
    let text = std::fs::read_to_string(file).map_err(|e| {
        ScreenplayError::new(ScreenplayErrorKind::FileRead(format!(
            "{}: {}",
            file.display(),
            e
        )))
    })?;

    let blocks = classify_section(&text);
    tracing::debug!(blocks = blocks.len(), "Classified file");

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&blocks)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            for block in &blocks {
                println!("{:<14} {}", block.kind().to_string(), block.text());
            }
            println!("{:-<80}", "");
            for kind in BlockKind::iter() {
                let count = blocks.iter().filter(|b| *b.kind() == kind).count();
                if count > 0 {
                    println!("{}: {}", kind, count);
                }
            }
            println!("Total: {} blocks", blocks.len());
        }
    }

    Ok(())
}

//! Assembled screenplay ready for rendering.

use crate::{Brief, LayoutBlock, PageRange};
use serde::{Deserialize, Serialize};

/// One section's classified blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct DocumentSection {
    /// Section title
    title: String,
    /// Pages covered
    page_range: PageRange,
    /// Blocks in source line order
    blocks: Vec<LayoutBlock>,
}

impl DocumentSection {
    /// Creates a document section.
    pub fn new(title: impl Into<String>, page_range: PageRange, blocks: Vec<LayoutBlock>) -> Self {
        Self {
            title: title.into(),
            page_range,
            blocks,
        }
    }
}

/// Everything a renderer needs: the brief for the title page and the sections in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ScreenplayDocument {
    /// Brief shown on the title page
    brief: Brief,
    /// Sections in ordinal order
    sections: Vec<DocumentSection>,
}

impl ScreenplayDocument {
    /// Creates a document from already classified sections.
    pub fn new(brief: Brief, sections: Vec<DocumentSection>) -> Self {
        Self { brief, sections }
    }

    /// Total number of blocks across all sections.
    pub fn block_count(&self) -> usize {
        self.sections.iter().map(|s| s.blocks.len()).sum()
    }
}

//! The fixed, ordered list of screenplay sections.

use crate::PageRange;
use scriptforge_error::{ConfigError, ScriptforgeResult};
use serde::{Deserialize, Serialize};

/// Static description of one section of the screenplay.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct SectionSpec {
    /// 1-based position in the catalog
    ordinal: u8,
    /// Section title
    title: String,
    /// Pages covered by the section
    page_range: PageRange,
    /// What the section is about, for display
    focus: String,
}

impl SectionSpec {
    /// Creates a section spec.
    pub fn new(
        ordinal: u8,
        title: impl Into<String>,
        page_range: PageRange,
        focus: impl Into<String>,
    ) -> Self {
        Self {
            ordinal,
            title: title.into(),
            page_range,
            focus: focus.into(),
        }
    }
}

/// Ordered section list used for every run.
///
/// Ordinals are contiguous and ascending from 1.
///
/// # Examples
///
/// ```
/// use scriptforge_core::SectionCatalog;
///
/// let catalog = SectionCatalog::screenplay();
/// assert_eq!(catalog.len(), 5);
/// assert_eq!(catalog.get(3).unwrap().title(), "Midpoint & Complications");
/// assert!(catalog.get(6).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCatalog {
    sections: Vec<SectionSpec>,
}

impl SectionCatalog {
    /// The five-act feature-length layout (120 pages).
    pub fn screenplay() -> Self {
        Self {
            sections: vec![
                SectionSpec::new(
                    1,
                    "Opening & Setup",
                    PageRange::new(1, 24),
                    "Character introduction and story setup",
                ),
                SectionSpec::new(
                    2,
                    "Rising Action",
                    PageRange::new(25, 48),
                    "Conflict development and plot advancement",
                ),
                SectionSpec::new(
                    3,
                    "Midpoint & Complications",
                    PageRange::new(49, 72),
                    "Major plot point and character challenges",
                ),
                SectionSpec::new(
                    4,
                    "Climax & Final Act",
                    PageRange::new(73, 96),
                    "Climax and resolution buildup",
                ),
                SectionSpec::new(
                    5,
                    "Resolution",
                    PageRange::new(97, 120),
                    "Conclusion and character arcs completion",
                ),
            ],
        }
    }

    /// Builds a custom catalog.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the list is empty or the ordinals are not
    /// exactly `1..=n` in ascending order.
    pub fn new(sections: Vec<SectionSpec>) -> ScriptforgeResult<Self> {
        if sections.is_empty() {
            return Err(ConfigError::new("Section catalog cannot be empty").into());
        }

        for (index, spec) in sections.iter().enumerate() {
            let expected = index + 1;
            if usize::from(*spec.ordinal()) != expected {
                return Err(ConfigError::new(format!(
                    "Section '{}' has ordinal {}, expected {}",
                    spec.title(),
                    spec.ordinal(),
                    expected
                ))
                .into());
            }
        }

        Ok(Self { sections })
    }

    /// All sections in ordinal order.
    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    /// Look up a section by its 1-based ordinal.
    pub fn get(&self, ordinal: u8) -> Option<&SectionSpec> {
        usize::from(ordinal)
            .checked_sub(1)
            .and_then(|index| self.sections.get(index))
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self::screenplay()
    }
}

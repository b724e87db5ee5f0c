//! Per-run section lifecycle.

use crate::SectionSpec;
use scriptforge_error::{ScreenplayError, ScreenplayErrorKind, ScriptforgeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Inclusive page range covered by a section.
///
/// # Examples
///
/// ```
/// use scriptforge_core::PageRange;
///
/// let range: PageRange = "25-48".parse().unwrap();
/// assert_eq!(range.page_count(), 24);
/// assert_eq!(range.to_string(), "25-48");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageRange {
    start: u16,
    end: u16,
}

impl PageRange {
    /// Creates a page range. `end` is clamped so the range always covers at least one page.
    pub const fn new(start: u16, end: u16) -> Self {
        let end = if end < start { start } else { end };
        Self { start, end }
    }

    /// First page.
    pub fn start(&self) -> u16 {
        self.start
    }

    /// Last page (inclusive).
    pub fn end(&self) -> u16 {
        self.end
    }

    /// Number of pages covered, counting both ends.
    pub fn page_count(&self) -> u16 {
        self.end.saturating_sub(self.start) + 1
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for PageRange {
    type Err = ScreenplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScreenplayError::new(ScreenplayErrorKind::InvalidPageRange(s.to_string()));

        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start: u16 = start.trim().parse().map_err(|_| invalid())?;
        let end: u16 = end.trim().parse().map_err(|_| invalid())?;

        if end < start {
            return Err(invalid());
        }

        Ok(Self { start, end })
    }
}

/// Lifecycle status of a section within one run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SectionStatus {
    /// Waiting for its turn
    Pending,
    /// The generation call is in flight
    Generating,
    /// Content resolved successfully
    Completed,
    /// Retries exhausted or terminal failure; content is empty
    Error,
}

impl SectionStatus {
    /// Terminal statuses see no further automatic transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SectionStatus::Completed | SectionStatus::Error)
    }
}

/// Mutable record of one section during a run.
///
/// Transitions are explicit and validated:
///
/// ```text
/// pending ──begin──▶ generating ──complete──▶ completed
///                        │
///                        └────fail────▶ error ──restart──▶ generating
/// ```
///
/// # Examples
///
/// ```
/// use scriptforge_core::{SectionCatalog, SectionState, SectionStatus};
///
/// let catalog = SectionCatalog::screenplay();
/// let mut state = SectionState::pending(&catalog.sections()[0]);
/// state.begin().unwrap();
/// state.complete("FADE IN:").unwrap();
///
/// assert_eq!(*state.status(), SectionStatus::Completed);
/// assert!(state.begin().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SectionState {
    /// 1-based position in the catalog
    ordinal: u8,
    /// Section title
    title: String,
    /// Pages covered
    page_range: PageRange,
    /// Generated text, empty until resolved
    content: String,
    /// Current lifecycle status
    status: SectionStatus,
    /// Last failure message while in the error status
    error: Option<String>,
}

impl SectionState {
    /// Creates a pending state for a catalog entry.
    pub fn pending(spec: &SectionSpec) -> Self {
        Self {
            ordinal: *spec.ordinal(),
            title: spec.title().clone(),
            page_range: *spec.page_range(),
            content: String::new(),
            status: SectionStatus::Pending,
            error: None,
        }
    }

    /// Move from `pending` to `generating`.
    pub fn begin(&mut self) -> ScriptforgeResult<()> {
        if self.status != SectionStatus::Pending {
            return Err(self.invalid(SectionStatus::Generating));
        }
        self.transition(SectionStatus::Generating);
        Ok(())
    }

    /// Move from `error` back to `generating` for a manual re-attempt.
    pub fn restart(&mut self) -> ScriptforgeResult<()> {
        if self.status != SectionStatus::Error {
            return Err(self.invalid(SectionStatus::Generating));
        }
        self.content.clear();
        self.error = None;
        self.transition(SectionStatus::Generating);
        Ok(())
    }

    /// Move from `generating` to `completed`, storing the content.
    pub fn complete(&mut self, content: impl Into<String>) -> ScriptforgeResult<()> {
        if self.status != SectionStatus::Generating {
            return Err(self.invalid(SectionStatus::Completed));
        }
        self.content = content.into();
        self.transition(SectionStatus::Completed);
        Ok(())
    }

    /// Move from `generating` to `error`, leaving content empty.
    pub fn fail(&mut self, message: impl Into<String>) -> ScriptforgeResult<()> {
        if self.status != SectionStatus::Generating {
            return Err(self.invalid(SectionStatus::Error));
        }
        self.content.clear();
        self.error = Some(message.into());
        self.transition(SectionStatus::Error);
        Ok(())
    }

    fn transition(&mut self, to: SectionStatus) {
        debug!(ordinal = self.ordinal, from = %self.status, to = %to, "Section transition");
        self.status = to;
    }

    fn invalid(&self, to: SectionStatus) -> scriptforge_error::ScriptforgeError {
        ScreenplayError::new(ScreenplayErrorKind::InvalidTransition {
            ordinal: self.ordinal,
            from: self.status.to_string(),
            to: to.to_string(),
        })
        .into()
    }
}

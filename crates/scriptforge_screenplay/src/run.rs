//! State of one screenplay run.

use crate::export::join_sections;
use scriptforge_core::{Brief, SectionCatalog, SectionState, SectionStatus};
use scriptforge_error::{ScreenplayError, ScreenplayErrorKind, ScriptforgeResult};
use uuid::Uuid;

/// Every section of one run, in ordinal order.
///
/// Owned by the orchestrator while the run is in progress; everything else reads it
/// through shared references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenplayRun {
    id: Uuid,
    brief: Brief,
    sections: Vec<SectionState>,
    /// Previous-section text each section was generated with, by index
    contexts: Vec<String>,
}

impl ScreenplayRun {
    /// Fresh run with every section pending.
    pub fn new(brief: Brief, catalog: &SectionCatalog) -> Self {
        let sections: Vec<SectionState> = catalog.sections().iter().map(SectionState::pending).collect();
        let contexts = vec![String::new(); sections.len()];
        Self {
            id: Uuid::new_v4(),
            brief,
            sections,
            contexts,
        }
    }

    /// Unique run identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The brief this run was generated from.
    pub fn brief(&self) -> &Brief {
        &self.brief
    }

    /// All sections in ordinal order.
    pub fn sections(&self) -> &[SectionState] {
        &self.sections
    }

    /// A section by 1-based ordinal.
    pub fn section(&self, ordinal: u8) -> Option<&SectionState> {
        Self::index(ordinal).and_then(|i| self.sections.get(i))
    }

    /// True when every section completed.
    pub fn is_complete(&self) -> bool {
        self.sections
            .iter()
            .all(|s| *s.status() == SectionStatus::Completed)
    }

    /// True when no section is pending or generating.
    pub fn is_finished(&self) -> bool {
        self.sections.iter().all(|s| s.status().is_terminal())
    }

    /// Ordinals of sections in the `error` status.
    pub fn failed_ordinals(&self) -> Vec<u8> {
        self.sections
            .iter()
            .filter(|s| *s.status() == SectionStatus::Error)
            .map(|s| *s.ordinal())
            .collect()
    }

    /// Raw content of every section joined by a blank line, failed sections included.
    pub fn plain_text(&self) -> String {
        join_sections(&self.sections)
    }

    pub(crate) fn section_mut(&mut self, ordinal: u8) -> ScriptforgeResult<&mut SectionState> {
        Self::index(ordinal)
            .and_then(|i| self.sections.get_mut(i))
            .ok_or_else(|| ScreenplayError::new(ScreenplayErrorKind::UnknownOrdinal(ordinal)).into())
    }

    /// Content a section hands to its successor: its text if completed, else nothing.
    pub(crate) fn handoff(&self, ordinal: u8) -> String {
        match self.section(ordinal) {
            Some(s) if *s.status() == SectionStatus::Completed => s.content().clone(),
            _ => String::new(),
        }
    }

    pub(crate) fn context(&self, ordinal: u8) -> &str {
        Self::index(ordinal)
            .and_then(|i| self.contexts.get(i))
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub(crate) fn record_context(&mut self, ordinal: u8, previous: String) {
        if let Some(slot) = Self::index(ordinal).and_then(|i| self.contexts.get_mut(i)) {
            *slot = previous;
        }
    }

    fn index(ordinal: u8) -> Option<usize> {
        usize::from(ordinal).checked_sub(1)
    }
}

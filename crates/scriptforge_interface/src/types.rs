//! Event types emitted during a screenplay run.

use scriptforge_core::{SectionState, SectionStatus};
use serde::{Deserialize, Serialize};

/// Notification of a single section transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEvent {
    /// Section ordinal
    pub ordinal: u8,
    /// Status after the transition
    pub status: SectionStatus,
    /// Failure message when `status` is `error`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&SectionState> for SectionEvent {
    fn from(state: &SectionState) -> Self {
        Self {
            ordinal: *state.ordinal(),
            status: *state.status(),
            error: state.error().clone(),
        }
    }
}

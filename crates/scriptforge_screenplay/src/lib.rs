//! Sectioned screenplay generation.
//!
//! The [`ScreenplayOrchestrator`] walks the section catalog in order, asking the
//! [`SectionGenerator`] for each section and feeding every completed section into
//! the next prompt as continuity context. Failures are recorded per section and
//! never stop the run.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod export;
mod generator;
mod orchestrator;
mod prompt;
mod run;

pub use export::{join_sections, write_plain_text};
pub use generator::SectionGenerator;
pub use orchestrator::ScreenplayOrchestrator;
pub use prompt::{CONTEXT_EXCERPT_CHARS, build_section_prompt, context_excerpt, section_focus};
pub use run::ScreenplayRun;

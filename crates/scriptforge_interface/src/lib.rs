//! Trait definitions for ScriptForge.
//!
//! This crate defines the seams between the orchestration logic and its
//! collaborators: the text generation service and the document renderer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{DocumentRenderer, GenerationDriver};
pub use types::SectionEvent;

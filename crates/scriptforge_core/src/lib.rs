//! Core data types for ScriptForge.
//!
//! This crate provides the data model shared by every other ScriptForge crate:
//! the creative [`Brief`], the fixed [`SectionCatalog`], per-run [`SectionState`]
//! records, classified [`LayoutBlock`]s, and the request/response types exchanged
//! with a generation service.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod brief;
mod catalog;
mod document;
mod layout;
mod request;
mod section;

pub use brief::{Brief, BriefBuilder};
pub use catalog::{SectionCatalog, SectionSpec};
pub use document::{DocumentSection, ScreenplayDocument};
pub use layout::{BlockKind, IndentLevel, LayoutBlock, StyleHints};
pub use request::{ApiKey, GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerationConfig};
pub use section::{PageRange, SectionState, SectionStatus};

//! Screenplay layout classification and document rendering.
//!
//! Raw section text is split into lines and each line is classified into a
//! [`LayoutBlock`](scriptforge_core::LayoutBlock). The classified sections form a
//! [`ScreenplayDocument`](scriptforge_core::ScreenplayDocument), which a
//! [`DocumentRenderer`](scriptforge_interface::DocumentRenderer) turns into bytes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembly;
mod classifier;
mod docx;

pub use assembly::{assemble_document, write_document};
pub use classifier::{CUE_MAX_CHARS, SCENE_PREFIXES, classify_line, classify_section};
pub use docx::DocxRenderer;

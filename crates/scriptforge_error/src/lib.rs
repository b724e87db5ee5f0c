//! Error types for ScriptForge.
//!
//! This crate provides the foundation error types used throughout the ScriptForge workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use scriptforge_error::{ScriptforgeResult, ConfigError};
//!
//! fn load_settings() -> ScriptforgeResult<String> {
//!     Err(ConfigError::new("Missing [service] table"))?
//! }
//!
//! assert!(load_settings().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod document;
mod error;
mod gemini;
mod json;
mod screenplay;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use document::{DocumentError, DocumentErrorKind};
pub use error::{ScriptforgeError, ScriptforgeErrorKind, ScriptforgeResult};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use json::JsonError;
pub use screenplay::{ScreenplayError, ScreenplayErrorKind};

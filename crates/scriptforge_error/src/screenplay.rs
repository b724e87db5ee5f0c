//! Screenplay generation error types.

/// Specific error conditions for screenplay generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ScreenplayErrorKind {
    /// Failed to read an input file
    #[display("Failed to read input file: {}", _0)]
    FileRead(String),
    /// Failed to parse brief TOML content
    #[display("Failed to parse brief TOML: {}", _0)]
    BriefParse(String),
    /// Page range string could not be parsed
    #[display("Invalid page range '{}'", _0)]
    InvalidPageRange(String),
    /// Ordinal not present in the section catalog
    #[display("Section {} does not exist in the catalog", _0)]
    UnknownOrdinal(u8),
    /// A section lifecycle transition that the state machine does not allow
    #[display("Section {} cannot move from {} to {}", ordinal, from, to)]
    InvalidTransition {
        /// Section ordinal
        ordinal: u8,
        /// Current status
        from: String,
        /// Requested status
        to: String,
    },
    /// Failed to write an export file
    #[display("Failed to write export: {}", _0)]
    ExportWrite(String),
}

/// Error type for screenplay generation.
///
/// # Examples
///
/// ```
/// use scriptforge_error::{ScreenplayError, ScreenplayErrorKind};
///
/// let err = ScreenplayError::new(ScreenplayErrorKind::UnknownOrdinal(9));
/// assert!(format!("{}", err).contains("Section 9"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Screenplay Error: {} at line {} in {}", kind, line, file)]
pub struct ScreenplayError {
    /// The specific error condition
    pub kind: ScreenplayErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ScreenplayError {
    /// Create a new ScreenplayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScreenplayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

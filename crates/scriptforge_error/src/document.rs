//! Document assembly error types.

/// Kinds of document assembly errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DocumentErrorKind {
    /// Failed to write an entry into the document package
    #[display("Failed to write package entry '{}': {}", entry, message)]
    PackageWrite {
        /// Archive entry name
        entry: String,
        /// Underlying error message
        message: String,
    },
    /// Failed to finalize the document package
    #[display("Failed to finalize document: {}", _0)]
    Finalize(String),
    /// Failed to write the document to disk
    #[display("Failed to write document file: {}", _0)]
    FileWrite(String),
}

/// Document assembly error with location tracking.
///
/// # Examples
///
/// ```
/// use scriptforge_error::{DocumentError, DocumentErrorKind};
///
/// let err = DocumentError::new(DocumentErrorKind::Finalize("disk full".to_string()));
/// assert!(format!("{}", err).contains("disk full"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Document Error: {} at line {} in {}", kind, line, file)]
pub struct DocumentError {
    /// The kind of error that occurred
    pub kind: DocumentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DocumentError {
    /// Create a new document error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DocumentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, DocumentError, GeminiError, JsonError, RetryableError, ScreenplayError,
};

/// Every error condition a ScriptForge operation can surface.
///
/// # Examples
///
/// ```
/// use scriptforge_error::{ScriptforgeError, JsonError};
///
/// let json_err = JsonError::new("expected value at line 1");
/// let err: ScriptforgeError = json_err.into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScriptforgeErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Generation service error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Screenplay generation error
    #[from(ScreenplayError)]
    Screenplay(ScreenplayError),
    /// Document assembly error
    #[from(DocumentError)]
    Document(DocumentError),
}

/// ScriptForge error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scriptforge_error::{ScriptforgeResult, ConfigError};
///
/// fn might_fail() -> ScriptforgeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("ScriptForge Error: {}", _0)]
pub struct ScriptforgeError(Box<ScriptforgeErrorKind>);

impl ScriptforgeError {
    /// Create a new error from a kind.
    pub fn new(kind: ScriptforgeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScriptforgeErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ScriptforgeErrorKind
impl<T> From<T> for ScriptforgeError
where
    T: Into<ScriptforgeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl RetryableError for ScriptforgeError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            ScriptforgeErrorKind::Gemini(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for ScriptForge operations.
pub type ScriptforgeResult<T> = std::result::Result<T, ScriptforgeError>;

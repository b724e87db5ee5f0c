//! Gemini-specific error types and retry classification.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// No credential configured for the section ordinal
    #[display("No API credential configured for section {}", _0)]
    MissingCredential(u8),
    /// Failed to create the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// The request failed before any response was received
    #[display("Gemini transport failure: {}", _0)]
    Transport(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// A success response without extractable text
    #[display("Invalid response format from Gemini API: {}", _0)]
    MalformedResponse(String),
}

impl GeminiErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Transport failures, rate limiting (429) and any server-side (5xx) status are
    /// transient. Every other status and every malformed success response is terminal.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiErrorKind::Transport(_) => true,
            GeminiErrorKind::HttpError { status_code, .. } => {
                *status_code == 429 || *status_code >= 500
            }
            _ => false,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use scriptforge_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingCredential(3));
/// assert!(format!("{}", err).contains("section 3"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use scriptforge_error::{GeminiError, GeminiErrorKind, RetryableError};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(err.is_retryable());
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 400,
///     message: "Bad request".to_string(),
/// });
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Transient errors like 503 (service unavailable), 429 (rate limit),
    /// or network failures should return true. Permanent errors like 401
    /// (unauthorized) or 400 (bad request) should return false.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for GeminiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> GeminiErrorKind {
        GeminiErrorKind::HttpError {
            status_code: code,
            message: String::new(),
        }
    }

    #[test]
    fn test_server_side_statuses_are_retryable() {
        for code in [429, 500, 502, 503, 504, 599] {
            assert!(status(code).is_retryable(), "{code} should be retryable");
        }
    }

    #[test]
    fn test_client_statuses_are_terminal() {
        for code in [400, 401, 403, 404, 408, 422] {
            assert!(!status(code).is_retryable(), "{code} should be terminal");
        }
    }

    #[test]
    fn test_transport_retryable_malformed_terminal() {
        assert!(GeminiErrorKind::Transport("reset".into()).is_retryable());
        assert!(!GeminiErrorKind::MalformedResponse("no candidates".into()).is_retryable());
        assert!(!GeminiErrorKind::MissingCredential(1).is_retryable());
    }
}

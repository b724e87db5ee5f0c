//! Core trait definitions for ScriptForge collaborators.

use async_trait::async_trait;
use scriptforge_core::{GenerateRequest, GenerateResponse, ScreenplayDocument};
use scriptforge_error::ScriptforgeResult;

/// A text generation backend.
///
/// Implementations perform exactly one outbound call per invocation. Retrying is
/// the caller's concern.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate text for a single prompt.
    async fn generate(&self, req: &GenerateRequest) -> ScriptforgeResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.0-flash-exp").
    fn model_name(&self) -> &str;
}

/// Turns an assembled screenplay into a file format.
pub trait DocumentRenderer {
    /// Render the document to bytes.
    fn render(&self, doc: &ScreenplayDocument) -> ScriptforgeResult<Vec<u8>>;

    /// File extension without the leading dot (e.g., "docx").
    fn extension(&self) -> &'static str;
}

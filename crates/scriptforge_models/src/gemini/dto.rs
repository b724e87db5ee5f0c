//! Gemini wire format.

use derive_getters::Getters;
use scriptforge_core::{GenerateRequest, GenerationConfig};
use serde::{Deserialize, Serialize};

/// One text part of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct GeminiPart {
    /// Text payload; absent for non-text parts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// A content block made of parts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct GeminiContent {
    /// Ordered parts
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

/// Request body for `generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Single-turn prompt
    contents: Vec<GeminiContent>,
    /// Sampling parameters
    generation_config: GenerationConfig,
}

impl From<&GenerateRequest> for GeminiRequest {
    fn from(req: &GenerateRequest) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Some(req.prompt().clone()),
                }],
            }],
            generation_config: *req.config(),
        }
    }
}

/// One candidate completion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct GeminiCandidate {
    /// Candidate content
    #[serde(default)]
    content: Option<GeminiContent>,
}

/// Response body from `generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters)]
pub struct GeminiResponse {
    /// Candidates, best first
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Text of the first part of the first candidate, if there is any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

//! Request and response types for text generation.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An API credential. Never printed in full.
///
/// # Examples
///
/// ```
/// use scriptforge_core::ApiKey;
///
/// let key = ApiKey::new("AIza-secret");
/// assert_eq!(key.expose(), "AIza-secret");
/// assert!(!format!("{:?}", key).contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a credential value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw credential, for building the outbound request only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True for an empty or whitespace-only value.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Top-k sampling cutoff
    pub top_k: u32,
    /// Nucleus sampling probability mass
    pub top_p: f32,
    /// Maximum tokens in the response
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Fixed parameters used for screenplay sections.
    pub const fn screenplay() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 8192,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::screenplay()
    }
}

/// A single-prompt generation request.
///
/// # Examples
///
/// ```
/// use scriptforge_core::{ApiKey, GenerateRequest, GenerationConfig};
///
/// let request = GenerateRequest::builder()
///     .prompt("Write the opening scene")
///     .credential(ApiKey::new("key-1"))
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.config(), GenerationConfig::screenplay());
/// ```
#[derive(Debug, Clone, PartialEq, Builder, derive_getters::Getters)]
pub struct GenerateRequest {
    /// Rendered prompt text
    #[builder(setter(into))]
    prompt: String,
    /// Credential for this request
    credential: ApiKey,
    /// Sampling parameters
    #[builder(default = "GenerationConfig::screenplay()")]
    config: GenerationConfig,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Text extracted from a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated text
    pub text: String,
}

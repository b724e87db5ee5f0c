//! Generation service clients for ScriptForge.
//!
//! Each provider lives behind its own feature flag. The default build includes
//! the Gemini `generateContent` client.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use scriptforge_core::{ApiKey, GenerateRequest};
//! use scriptforge_interface::GenerationDriver;
//! use scriptforge_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new()?;
//! let request = GenerateRequest::builder()
//!     .prompt("Write a logline for a heist film")
//!     .credential(ApiKey::new("your-key"))
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    GeminiCandidate, GeminiClient, GeminiContent, GeminiPart, GeminiRequest, GeminiResponse,
};

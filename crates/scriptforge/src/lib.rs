//! ScriptForge - feature-length screenplays from a creative brief
//!
//! ScriptForge turns a short creative brief into a five-section screenplay by calling
//! a text generation service once per section, handing each finished section to the
//! next as continuity context. The raw text is then classified line by line into
//! screenplay layout blocks and exported as plain text or a `.docx` document.
//!
//! # Features
//!
//! - **Sectioned generation**: Five sequential calls with per-section credentials
//! - **Retry with backoff**: Transient failures retried with exponential delays
//! - **Failure isolation**: A failed section never stops the run
//! - **Layout classification**: Scene headings, cues, parentheticals, dialogue, action
//! - **DOCX export**: Industry-style formatting in a WordprocessingML package
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use scriptforge::{
//!     Brief, CredentialTable, GeminiClient, RetryPolicy, ScreenplayOrchestrator,
//!     ScriptforgeConfig, SectionCatalog, SectionGenerator,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ScriptforgeConfig::load()?;
//!     let credentials =
//!         CredentialTable::from_config(&config.credentials, SectionCatalog::screenplay().len())?;
//!     let client = GeminiClient::from_config(&config.service)?;
//!     let generator =
//!         SectionGenerator::new(client, credentials, RetryPolicy::from_config(&config.retry));
//!
//!     let brief = Brief::from_file("brief.toml")?;
//!     let run = ScreenplayOrchestrator::new(generator)?.run(&brief).await?;
//!     println!("{}", run.plain_text());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `gemini` - Google Gemini `generateContent` client (default)
//!
//! # Architecture
//!
//! - `scriptforge_error` - Error types
//! - `scriptforge_core` - Brief, section catalog, section state, layout blocks
//! - `scriptforge_interface` - Generation driver and document renderer traits
//! - `scriptforge_retry` - Retry policy, configuration, credentials
//! - `scriptforge_models` - Generation service clients
//! - `scriptforge_screenplay` - Prompting and the generation orchestrator
//! - `scriptforge_document` - Layout classification and DOCX rendering
//!
//! This crate (`scriptforge`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use scriptforge_core::*;
pub use scriptforge_document::*;
pub use scriptforge_error::*;
pub use scriptforge_interface::*;
pub use scriptforge_retry::*;
pub use scriptforge_screenplay::*;

#[cfg(feature = "gemini")]
pub use scriptforge_models::*;

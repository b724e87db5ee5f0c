//! Google Gemini `generateContent` integration.

mod client;
mod dto;

pub use client::GeminiClient;
pub use dto::{GeminiCandidate, GeminiContent, GeminiPart, GeminiRequest, GeminiResponse};

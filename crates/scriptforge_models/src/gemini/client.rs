//! Gemini `generateContent` client over reqwest.

use crate::gemini::{GeminiRequest, GeminiResponse};
use async_trait::async_trait;
use reqwest::Client;
use scriptforge_core::{GenerateRequest, GenerateResponse};
use scriptforge_error::{GeminiError, GeminiErrorKind, ScriptforgeResult};
use scriptforge_interface::GenerationDriver;
use scriptforge_retry::ServiceConfig;
use tracing::{debug, instrument};

/// Gemini client making one `generateContent` call per request.
///
/// The credential travels with each request, so one client serves every section.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    /// Creates a client for the default endpoint and model.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> ScriptforgeResult<Self> {
        Self::from_config(&ServiceConfig::default())
    }

    /// Creates a client from the `[service]` configuration table.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all, fields(endpoint = %service.endpoint, model = %service.model))]
    pub fn from_config(service: &ServiceConfig) -> ScriptforgeResult<Self> {
        Self::with_endpoint(service.endpoint.clone(), service.model.clone())
    }

    /// Creates a client for an explicit endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> ScriptforgeResult<Self> {
        let client = Client::builder().build().map_err(|e| {
            GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string()))
        })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
        })
    }

    /// Endpoint URL, without the key parameter.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationDriver for GeminiClient {
    #[instrument(skip(self, req), fields(model = %self.model, prompt_len = req.prompt().len()))]
    async fn generate(&self, req: &GenerateRequest) -> ScriptforgeResult<GenerateResponse> {
        let body = GeminiRequest::from(req);
        debug!(endpoint = %self.endpoint, "Sending Gemini API request");

        // Request URLs carry the key; errors are stripped of them before logging.
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", req.credential().expose())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Transport(e.without_url().to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let raw = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::Transport(e.without_url().to_string())))?;

        let parsed: GeminiResponse = serde_json::from_str(&raw).map_err(|e| {
            GeminiError::new(GeminiErrorKind::MalformedResponse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let text = parsed.first_text().filter(|t| !t.is_empty()).ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::MalformedResponse(
                "No text in candidates[0].content.parts[0]".to_string(),
            ))
        })?;

        debug!(response_len = text.len(), "Gemini API request succeeded");

        Ok(GenerateResponse {
            text: text.to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

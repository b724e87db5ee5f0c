//! One section, one retried generation call.

use crate::build_section_prompt;
use scriptforge_core::{Brief, GenerateRequest, SectionSpec};
use scriptforge_error::{BuilderError, BuilderErrorKind, ScriptforgeResult};
use scriptforge_interface::GenerationDriver;
use scriptforge_retry::{CredentialTable, RetryPolicy};
use tracing::{debug, instrument};

/// Produces the text of a single section.
///
/// Looks up the section's credential, renders its prompt, and runs the driver call
/// under the retry policy.
#[derive(Debug)]
pub struct SectionGenerator<D: GenerationDriver> {
    driver: D,
    credentials: CredentialTable,
    retry: RetryPolicy,
}

impl<D: GenerationDriver> SectionGenerator<D> {
    /// Creates a section generator.
    pub fn new(driver: D, credentials: CredentialTable, retry: RetryPolicy) -> Self {
        Self {
            driver,
            credentials,
            retry,
        }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Credentials keyed by ordinal.
    pub fn credentials(&self) -> &CredentialTable {
        &self.credentials
    }

    /// Retry policy applied to each call.
    pub fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Generate one section's text.
    ///
    /// # Errors
    ///
    /// Returns the terminal error, or the last transient error once retries run out.
    #[instrument(
        skip(self, brief, spec, previous),
        fields(ordinal = spec.ordinal(), provider = self.driver.provider_name(), model = self.driver.model_name())
    )]
    pub async fn generate(
        &self,
        brief: &Brief,
        spec: &SectionSpec,
        previous: &str,
        total_sections: usize,
    ) -> ScriptforgeResult<String> {
        let credential = self.credentials.get(*spec.ordinal())?.clone();
        let prompt = build_section_prompt(brief, spec, previous, total_sections);
        debug!(prompt_len = prompt.len(), has_context = !previous.is_empty(), "Rendered prompt");

        let request = GenerateRequest::builder()
            .prompt(prompt)
            .credential(credential)
            .build()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())))?;

        let label = format!("section {}", spec.ordinal());
        let response = self
            .retry
            .execute(&label, || self.driver.generate(&request))
            .await?;

        Ok(response.text)
    }
}

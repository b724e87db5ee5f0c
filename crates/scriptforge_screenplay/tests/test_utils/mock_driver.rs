//! Scripted generation driver for testing.

use async_trait::async_trait;
use scriptforge_core::{GenerateRequest, GenerateResponse};
use scriptforge_error::{GeminiError, GeminiErrorKind, ScriptforgeError, ScriptforgeResult};
use scriptforge_interface::GenerationDriver;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// A single scripted response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GeminiErrorKind),
}

/// Driver whose responses are scripted per credential.
///
/// Each section uses its own credential, so scripting by credential scripts by
/// section. Once a credential's script runs out the driver succeeds with
/// `"Section text for {credential}"`. Clones share state, so a test can keep one
/// handle and give another to the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDriver {
    scripts: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    calls: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl ScriptedDriver {
    /// A driver that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue responses for requests carrying `credential`.
    pub fn script(self, credential: &str, responses: Vec<MockResponse>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .entry(credential.to_string())
            .or_default()
            .extend(responses);
        self
    }

    /// Every request received, in order.
    pub fn calls(&self) -> Vec<GenerateRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Prompts of requests carrying `credential`, in order.
    pub fn prompts_for(&self, credential: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|req| req.credential().expose() == credential)
            .map(|req| req.prompt().clone())
            .collect()
    }

    /// Number of requests carrying `credential`.
    pub fn call_count_for(&self, credential: &str) -> usize {
        self.prompts_for(credential).len()
    }
}

#[async_trait]
impl GenerationDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerateRequest) -> ScriptforgeResult<GenerateResponse> {
        self.calls.lock().unwrap().push(req.clone());

        let key = req.credential().expose().to_string();
        let next = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);

        match next {
            Some(MockResponse::Success(text)) => Ok(GenerateResponse { text }),
            Some(MockResponse::Error(kind)) => Err(ScriptforgeError::from(GeminiError::new(kind))),
            None => Ok(GenerateResponse {
                text: format!("Section text for {key}"),
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-model"
    }
}

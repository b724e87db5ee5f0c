//! Test utilities for screenplay tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockResponse, ScriptedDriver};

use scriptforge_core::{ApiKey, Brief};
use scriptforge_retry::{CredentialTable, RetryPolicy};
use scriptforge_screenplay::{ScreenplayOrchestrator, SectionGenerator};

/// The brief used throughout the screenplay tests.
pub fn nova_brief() -> Brief {
    Brief::builder()
        .title("Nova")
        .genre("sci-fi")
        .plot("A colony ship wakes its crew forty years early.")
        .main_characters("Ava")
        .tone("dramatic")
        .setting("Mars")
        .build()
        .expect("Failed to build brief")
}

/// Credential table with `key-1` .. `key-5`.
pub fn test_credentials() -> CredentialTable {
    let keys = (1..=5).map(|n| ApiKey::new(format!("key-{n}"))).collect();
    CredentialTable::new(keys, 5).expect("Failed to build credential table")
}

/// Orchestrator over the standard catalog with the default retry policy.
pub fn orchestrator(driver: ScriptedDriver) -> ScreenplayOrchestrator<ScriptedDriver> {
    let generator = SectionGenerator::new(driver, test_credentials(), RetryPolicy::default());
    ScreenplayOrchestrator::new(generator).expect("Failed to build orchestrator")
}

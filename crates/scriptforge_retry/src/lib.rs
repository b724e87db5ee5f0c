//! Retry policy, configuration loading and credential management for ScriptForge.
//!
//! - [`RetryPolicy`] wraps a fallible async call in exponential backoff
//! - [`ScriptforgeConfig`] layers bundled defaults with user overrides
//! - [`CredentialTable`] maps each section ordinal to exactly one API key

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod credentials;
mod policy;

pub use config::{CredentialsConfig, RetryConfig, ScriptforgeConfig, ServiceConfig};
pub use credentials::{CredentialTable, credential_env_var};
pub use policy::RetryPolicy;

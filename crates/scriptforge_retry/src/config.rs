//! Configuration loading.
//!
//! Sources in order of precedence (later sources override earlier):
//! - Bundled defaults (include_str! from scriptforge.toml)
//! - User config in home directory (~/.config/scriptforge/scriptforge.toml)
//! - User config in current directory (./scriptforge.toml)
//! - An explicit file, when one is given

use scriptforge_error::{ConfigError, ScriptforgeError, ScriptforgeResult};
use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../scriptforge.toml");

/// Endpoint used when no configuration overrides it.
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent";

/// Model used when no configuration overrides it.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

/// The `[service]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Full `generateContent` URL, without the key parameter
    pub endpoint: String,
    /// Model identifier, for logging
    pub model: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// The `[retry]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Attempts per call, including the first
    pub max_attempts: u32,
    /// Backoff unit in milliseconds
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 1000,
        }
    }
}

/// The `[credentials]` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct CredentialsConfig {
    /// One key per section, in ordinal order
    #[serde(default)]
    pub keys: Vec<String>,
}

/// Top-level ScriptForge configuration.
///
/// # Example
///
/// ```no_run
/// use scriptforge_retry::ScriptforgeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScriptforgeConfig::load()?;
/// println!("Endpoint: {}", config.service.endpoint);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ScriptforgeConfig {
    /// Generation service settings
    #[serde(default)]
    pub service: ServiceConfig,
    /// Retry settings
    #[serde(default)]
    pub retry: RetryConfig,
    /// Per-section credentials
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl ScriptforgeConfig {
    /// Load configuration from bundled defaults overlaid with a specific file.
    ///
    /// Values missing from the file keep their bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ScriptforgeResult<Self> {
        debug!("Loading configuration from file");

        let builder = Self::defaults().add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> ScriptforgeResult<Self> {
        Self::load_with(None)
    }

    /// Like [`load`](Self::load), with an optional explicit file on top.
    #[instrument(skip(explicit))]
    pub fn load_with(explicit: Option<&Path>) -> ScriptforgeResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scriptforge/scriptforge.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("scriptforge").required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Adding explicit configuration file");
            builder = builder.add_source(File::from(path));
        }

        Self::finish(builder)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> ScriptforgeResult<Self> {
        builder
            .build()
            .map_err(|e| {
                ScriptforgeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ScriptforgeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

//! One credential per section ordinal.

use crate::CredentialsConfig;
use scriptforge_core::ApiKey;
use scriptforge_error::{ConfigError, GeminiError, GeminiErrorKind, ScriptforgeResult};
use tracing::{debug, instrument};

/// Environment variable that overrides the credential for `ordinal`.
///
/// ```
/// assert_eq!(scriptforge_retry::credential_env_var(3), "SCRIPTFORGE_API_KEY_3");
/// ```
pub fn credential_env_var(ordinal: impl std::fmt::Display) -> String {
    format!("SCRIPTFORGE_API_KEY_{}", ordinal)
}

/// Validated ordinal → credential mapping.
///
/// The table always holds exactly one non-blank key per catalog section. A table
/// that does not match the catalog is rejected at construction, so lookups for a
/// catalog ordinal cannot fail.
///
/// # Examples
///
/// ```
/// use scriptforge_core::ApiKey;
/// use scriptforge_retry::CredentialTable;
///
/// let keys = (1..=5).map(|n| ApiKey::new(format!("key-{n}"))).collect();
/// let table = CredentialTable::new(keys, 5).unwrap();
/// assert_eq!(table.get(2).unwrap().expose(), "key-2");
/// assert!(table.get(6).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialTable {
    keys: Vec<ApiKey>,
}

impl CredentialTable {
    /// Creates a table, checking it against the number of catalog sections.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the key count differs from `section_count`
    /// or any key is blank.
    pub fn new(keys: Vec<ApiKey>, section_count: usize) -> ScriptforgeResult<Self> {
        if keys.len() != section_count {
            return Err(ConfigError::new(format!(
                "Expected {} credentials, found {}",
                section_count,
                keys.len()
            ))
            .into());
        }

        if let Some(index) = keys.iter().position(ApiKey::is_blank) {
            let ordinal = index + 1;
            return Err(ConfigError::new(format!(
                "Credential for section {} is empty (set {} or credentials.keys)",
                ordinal,
                credential_env_var(ordinal)
            ))
            .into());
        }

        Ok(Self { keys })
    }

    /// Builds the table from configuration, letting the process environment override
    /// individual entries.
    #[instrument(skip(config))]
    pub fn from_config(config: &CredentialsConfig, section_count: usize) -> ScriptforgeResult<Self> {
        Self::from_sources(config, section_count, |name| std::env::var(name).ok())
    }

    /// Builds the table from configuration and an arbitrary variable lookup.
    ///
    /// For each ordinal a non-empty variable named by [`credential_env_var`] wins over
    /// the configured key at the same position.
    pub fn from_sources<L>(
        config: &CredentialsConfig,
        section_count: usize,
        lookup: L,
    ) -> ScriptforgeResult<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        if config.keys.len() > section_count {
            return Err(ConfigError::new(format!(
                "Expected {} credentials, found {}",
                section_count,
                config.keys.len()
            ))
            .into());
        }

        let mut keys = Vec::with_capacity(section_count);
        for index in 0..section_count {
            let ordinal = u8::try_from(index + 1).map_err(|_| {
                ConfigError::new(format!("Section count {} is too large", section_count))
            })?;

            let value = match lookup(&credential_env_var(ordinal)).filter(|v| !v.trim().is_empty()) {
                Some(value) => {
                    debug!(ordinal, "Credential taken from environment");
                    value
                }
                None => config.keys.get(index).cloned().unwrap_or_default(),
            };
            keys.push(ApiKey::new(value));
        }

        Self::new(keys, section_count)
    }

    /// Credential for a 1-based ordinal.
    ///
    /// # Errors
    ///
    /// Returns `MissingCredential` for an ordinal outside the table.
    pub fn get(&self, ordinal: u8) -> ScriptforgeResult<&ApiKey> {
        usize::from(ordinal)
            .checked_sub(1)
            .and_then(|index| self.keys.get(index))
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingCredential(ordinal)).into())
    }

    /// Number of credentials.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True only for a table built for an empty catalog.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

use scriptforge_retry::{RetryPolicy, ScriptforgeConfig};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_bundled_defaults_load() -> anyhow::Result<()> {
    let config = ScriptforgeConfig::load()?;

    assert!(config.service.endpoint.ends_with(":generateContent"));
    assert_eq!(config.retry.max_attempts, 5);
    assert_eq!(config.retry.base_delay_ms, 1000);
    Ok(())
}

#[test]
fn test_file_overrides_defaults() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        r#"
[retry]
base_delay_ms = 5

[credentials]
keys = ["a", "b", "c", "d", "e"]
"#
    )?;

    let config = ScriptforgeConfig::from_file(file.path())?;

    assert_eq!(config.retry.base_delay_ms, 5);
    assert_eq!(config.retry.max_attempts, 5);
    assert_eq!(config.credentials.keys.len(), 5);
    assert!(config.service.endpoint.starts_with("https://"));

    let policy = RetryPolicy::from_config(&config.retry);
    assert_eq!(policy.base_delay(), Duration::from_millis(5));
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() {
    let result = ScriptforgeConfig::from_file("/no/such/scriptforge.toml");
    assert!(result.is_err());
}

#[test]
fn test_malformed_file_is_an_error() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[retry]\nmax_attempts = \"many\"")?;

    let result = ScriptforgeConfig::from_file(file.path());
    assert!(result.is_err());
    Ok(())
}

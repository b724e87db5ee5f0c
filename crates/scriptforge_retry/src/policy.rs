//! Exponential backoff around a single fallible call.

use crate::RetryConfig;
use scriptforge_error::RetryableError;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio_retry2::{Retry, RetryError};
use tracing::{debug, warn};

/// Retry behavior for one generation call.
///
/// Up to `max_attempts` calls are made. Before retry `n` (counting from 0) the
/// policy waits `base_delay * 2^n`; there is no wait after the final attempt and
/// no jitter. Only errors that report themselves retryable are retried.
///
/// # Examples
///
/// ```
/// use scriptforge_retry::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
/// let secs: Vec<u64> = policy.delays().map(|d| d.as_secs()).collect();
/// assert_eq!(secs, [1, 2, 4, 8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// Attempts per call when nothing else is configured.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

    /// Backoff unit when nothing else is configured.
    pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

    /// Creates a policy. A `max_attempts` of zero is treated as one.
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// Builds a policy from the `[retry]` configuration table.
    pub fn from_config(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, Duration::from_millis(config.base_delay_ms))
    }

    /// Total attempts, including the first.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Backoff unit.
    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// The full backoff schedule, one entry per retry.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + use<> {
        let base = self.base_delay;
        (0..self.max_attempts - 1).map(move |n| base.saturating_mul(2u32.saturating_pow(n)))
    }

    /// Run `operation` until it succeeds, fails terminally, or attempts run out.
    ///
    /// On exhaustion the last observed error is returned.
    pub async fn execute<F, Fut, T, E>(&self, label: &str, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: RetryableError + Display,
    {
        let max_attempts = self.max_attempts;
        let mut attempt = 0u32;

        Retry::spawn(self.delays(), || {
            attempt += 1;
            let current = attempt;
            let call = operation();
            async move {
                debug!(label, attempt = current, max_attempts, "Attempting call");
                match call.await {
                    Ok(value) => Ok(value),
                    Err(e) if !e.is_retryable() => {
                        warn!(label, attempt = current, error = %e, "Permanent error, failing immediately");
                        Err(RetryError::Permanent(e))
                    }
                    Err(e) if current >= max_attempts => {
                        warn!(label, attempt = current, error = %e, "Retries exhausted");
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    }
                    Err(e) => {
                        warn!(label, attempt = current, error = %e, "Transient error, will retry");
                        Err(RetryError::Transient {
                            err: e,
                            retry_after: None,
                        })
                    }
                }
            }
        })
        .await
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_BASE_DELAY)
    }
}

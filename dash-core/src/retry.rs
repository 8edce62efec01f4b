//! Bounded retry for transient fetch failures.
//!
//! Eligibility comes from [`ErrorKind::is_retryable`](crate::error::ErrorKind::is_retryable);
//! this module only counts attempts and waits.

use std::future::Future;
use std::time::Duration;

use crate::error::FetchError;

/// Total attempts per city, including the first one.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Fixed wait before each retry. Zero means retry immediately.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Whether a failure on the given 1-based attempt earns another one.
    pub fn should_retry(&self, err: &FetchError, attempt: u32) -> bool {
        err.is_retryable() && attempt < self.max_attempts
    }

    /// Runs `operation` until it succeeds, fails terminally, or attempts run out.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, FetchError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let mut attempt = 1;
        loop {
            match operation(attempt).await {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::info!(attempt, "request succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(err) if self.should_retry(&err, attempt) => {
                    tracing::warn!(
                        city = %err.city,
                        kind = %err.kind,
                        attempt,
                        max_attempts = self.max_attempts,
                        "transient failure, retrying"
                    );
                    if !self.backoff.is_zero() {
                        tokio::time::sleep(self.backoff).await;
                    }
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::cell::Cell;

    fn err(kind: ErrorKind) -> FetchError {
        FetchError::new(kind, "Paris", "boom")
    }

    #[test]
    fn default_allows_one_retry() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 2);
        assert!(policy.backoff.is_zero());

        assert!(policy.should_retry(&err(ErrorKind::Timeout), 1));
        assert!(!policy.should_retry(&err(ErrorKind::Timeout), 2));
        assert!(!policy.should_retry(&err(ErrorKind::NotFound), 1));
    }

    #[test]
    fn zero_attempts_is_clamped_to_one() {
        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts, 1);
    }

    #[tokio::test]
    async fn timeout_then_success_takes_two_attempts() {
        let calls = Cell::new(0);
        let result = RetryPolicy::default()
            .run(|attempt| {
                calls.set(calls.get() + 1);
                async move {
                    if attempt == 1 {
                        Err(err(ErrorKind::Timeout))
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn terminal_error_is_not_retried() {
        let calls = Cell::new(0);
        let result: Result<(), _> = RetryPolicy::default()
            .run(|_| {
                calls.set(calls.get() + 1);
                async { Err(err(ErrorKind::Unauthorized)) }
            })
            .await;

        assert_eq!(result.unwrap_err().kind, ErrorKind::Unauthorized);
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn persistent_timeout_gives_up_after_max_attempts() {
        let calls = Cell::new(0);
        let result: Result<(), _> = RetryPolicy::new(3, Duration::from_millis(1))
            .run(|_| {
                calls.set(calls.get() + 1);
                async { Err(err(ErrorKind::Timeout)) }
            })
            .await;

        assert_eq!(result.unwrap_err().kind, ErrorKind::Timeout);
        assert_eq!(calls.get(), 3);
    }
}

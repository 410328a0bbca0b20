//! Bounded retry policy for order submission

use crate::ClientResult;
use std::future::Future;
use std::time::Duration;

/// Bounded retry with a fixed backoff between attempts
///
/// Used by the waiter flow; the customer flow never retries automatically
/// (the user must re-confirm instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Fixed delay between attempts
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Run `op` until it succeeds or attempts are exhausted
    ///
    /// Only retryable errors (network, timeout, HTTP status) trigger another
    /// attempt; validation errors surface immediately. Each attempt gets its
    /// own invocation of `op`, so callers can mint a fresh idempotency token
    /// per attempt.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> ClientResult<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let mut attempt = 1;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() && attempt < self.max_attempts => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "Submission attempt failed, retrying"
                    );
                    tokio::time::sleep(self.backoff).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

impl Default for RetryPolicy {
    /// 3 attempts, 1 second apart
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

//! Retry loop: run an async attempt until success or the policy says stop.

use super::classify::classify;
use super::policy::{RetryDecision, RetryPolicy};
use crate::error::FetchError;
use crate::types::FetchFailure;
use std::future::Future;
use std::time::Duration;

/// Reported before each scheduled retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryEvent {
    /// 1-based number of the retry about to run.
    pub retry: u32,
    pub max_retries: u32,
    pub delay: Duration,
    pub cause: String,
}

/// Runs `attempt` until it succeeds or the retry budget is spent.
///
/// Each attempt races the policy timeout; a lost race drops the in-flight
/// future and counts as [`FetchError::Timeout`]. `on_retry` fires before every
/// backoff sleep. Intermediate errors never reach the caller.
pub async fn run_with_retry<T, F, Fut, R>(
    policy: &RetryPolicy,
    mut attempt: F,
    mut on_retry: R,
) -> Result<T, FetchFailure>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
    R: FnMut(&RetryEvent),
{
    let mut n = 0u32;
    loop {
        let result = match tokio::time::timeout(policy.timeout, attempt(n)).await {
            Ok(r) => r,
            Err(_) => Err(FetchError::Timeout(policy.timeout)),
        };
        let err = match result {
            Ok(v) => return Ok(v),
            Err(e) => e,
        };
        match policy.decide(n, classify(&err)) {
            RetryDecision::NoRetry => {
                let attempts = policy.total_attempts();
                tracing::debug!(attempts, "giving up: {}", err);
                return Err(FetchFailure {
                    message: format!(
                        "failed to load hero data, check your network connection or try again later (details: {err})"
                    ),
                    attempts,
                });
            }
            RetryDecision::RetryAfter(delay) => {
                n += 1;
                tracing::debug!(
                    retry = n,
                    delay_ms = delay.as_millis() as u64,
                    "attempt failed: {}",
                    err
                );
                on_retry(&RetryEvent {
                    retry: n,
                    max_retries: policy.max_retries,
                    delay,
                    cause: err.to_string(),
                });
                tokio::time::sleep(delay).await;
            }
        }
    }
}

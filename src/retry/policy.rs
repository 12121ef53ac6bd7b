use super::classify::ErrorKind;
use std::time::Duration;

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    NoRetry,
    RetryAfter(Duration),
}

/// Bounded, linearly growing backoff with a per-attempt timeout.
///
/// The wait before retry `n` (1-based) is `base_delay * n`, so the defaults
/// give 2s, 4s and 6s before giving up after the third retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt.
    pub max_retries: u32,
    pub base_delay: Duration,
    /// Deadline for a single attempt, body included.
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(2000),
            timeout: Duration::from_millis(10_000),
        }
    }
}

impl RetryPolicy {
    /// Decide what to do after attempt number `attempt` (0-based) failed.
    ///
    /// Every kind is retried the same way; a 404 waits through the same
    /// schedule as a timeout.
    pub fn decide(&self, attempt: u32, _kind: ErrorKind) -> RetryDecision {
        if attempt >= self.max_retries {
            return RetryDecision::NoRetry;
        }
        RetryDecision::RetryAfter(self.delay_before_retry(attempt + 1))
    }

    /// Wait before retry `retry` (1-based).
    pub fn delay_before_retry(&self, retry: u32) -> Duration {
        self.base_delay.saturating_mul(retry)
    }

    /// Attempts made by a sequence that ran out of retries.
    pub fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

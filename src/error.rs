//! Error type for a single fetch attempt.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The attempt did not settle before the per-attempt deadline.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    /// Server answered with a non-2xx status.
    #[error("API request failed with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Body arrived but is not a JSON hero list.
    #[error("malformed hero data: {0}")]
    Parse(#[source] reqwest::Error),
    /// Body parsed but breaks a data invariant (duplicate id, bad win rate).
    #[error("invalid hero data: {0}")]
    Invalid(String),
}

//! Retry and backoff policy.
//!
//! Error classification and the backoff schedule live here so the loader and
//! the one-shot CLI commands share the same behaviour.

mod classify;
mod policy;
mod run;

pub use classify::{classify, ErrorKind};
pub use policy::{RetryDecision, RetryPolicy};
pub use run::{run_with_retry, RetryEvent};

//! Map fetch errors onto coarse kinds for retry decisions.

use crate::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Attempt lost the race against the timer.
    Timeout,
    /// Non-2xx HTTP status.
    Status(u16),
    /// Connection, DNS or transport failure.
    Network,
    /// Body could not be turned into a valid hero list.
    Parse,
}

pub fn classify(e: &FetchError) -> ErrorKind {
    match e {
        FetchError::Timeout(_) => ErrorKind::Timeout,
        FetchError::Status(code) => ErrorKind::Status(*code),
        FetchError::Network(inner) if inner.is_timeout() => ErrorKind::Timeout,
        FetchError::Network(_) => ErrorKind::Network,
        FetchError::Parse(_) | FetchError::Invalid(_) => ErrorKind::Parse,
    }
}

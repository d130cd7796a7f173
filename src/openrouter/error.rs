// Typed failures for one completion cycle

use thiserror::Error;

/// What went wrong while producing one assistant reply.
#[derive(Debug, Error)]
pub enum ChatError {
    /// No API key configured; the request is never attempted.
    #[error("no API key configured")]
    MissingCredential,

    /// The endpoint answered, but the body was not the expected shape.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    /// Transport-level or HTTP-status failure.
    #[error("network failure: {0}")]
    Network(String),

    /// Anything else.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ChatError {
    /// Only malformed responses are worth another attempt; every other
    /// class aborts the cycle on first occurrence.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ChatError::MalformedResponse(_))
    }
}

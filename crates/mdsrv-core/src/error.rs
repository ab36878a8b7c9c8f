//! Network-level error type shared by the fetcher and the client.

/// Failure of a fetch or of decoding its payload. Propagated to the caller
/// unchanged; nothing in this crate retries.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (connection refused, timeout, bad URL, ...).
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Http { url: String, status: u32 },
    /// Body was expected to be JSON but did not parse.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    /// Text or binary body did not have the expected shape.
    #[error("malformed payload: {0}")]
    Payload(String),
    /// The blocking fetch task panicked or was cancelled.
    #[error("fetch worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl FetchError {
    pub(crate) fn payload(msg: impl Into<String>) -> Self {
        FetchError::Payload(msg.into())
    }

    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

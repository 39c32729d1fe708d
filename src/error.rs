/// Classified failure of a single transport exchange.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The remote end rejected the request itself (4xx). Not retried.
    #[error("HTTP {status}: {body}")]
    Client { status: u16, body: String },
    /// Network, timeout or body read error from `reqwest`.
    #[error(transparent)]
    Request(reqwest::Error),
    /// Any other failure raised by a custom transport.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Whether retrying cannot help.
    pub fn is_client(&self) -> bool {
        matches!(self, TransportError::Client { .. })
    }
}

/// Why the last attempt of an exhausted call failed.
#[derive(Debug, thiserror::Error)]
pub enum AttemptFailure {
    /// A response arrived with a non-2xx status.
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    /// The transport raised a retryable error.
    #[error(transparent)]
    Transport(TransportError),
}

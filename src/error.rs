use thiserror::Error;

/// Failure modes of a single webhook delivery attempt.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Destination URL missing or malformed. Raised before any network
    /// I/O happens and never worth retrying.
    #[error("webhook not configured: {0}")]
    Configuration(String),

    /// DNS, TLS, connect or timeout failure below the HTTP layer.
    #[error("webhook transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("webhook delivery rejected with status {status}: {body}")]
    Delivery { status: u16, body: String },
}

impl DispatchError {
    /// Whether a manual resubmit by the user could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Configuration(_))
    }
}

use thiserror::Error;

/// Failure of a single call against the experiment service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with HTTP {status}")]
    Status { status: u16 },
    #[error("malformed experiment payload: {0}")]
    Decode(#[from] serde_json::Error),
}

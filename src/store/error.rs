use reqwest::StatusCode;
use thiserror::Error;

/// Errors talking to the task store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No response (connection refused, DNS, TLS, ...)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-2xx status
    #[error("task store rejected request: {status}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("base url cannot carry a path: {0}")]
    InvalidBaseUrl(String),
}

impl StoreError {
    /// True when the store was reached and said no
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::Status { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

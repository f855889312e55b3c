use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base_url: {0}")]
    InvalidUrl(String),
    #[error("invalid expense id: {0:?}")]
    InvalidId(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("{status}: {message}")]
    Server { status: StatusCode, message: String },
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Maps a non-success status and the store's error message.
    pub(crate) fn from_status(status: StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            _ => Self::Server { status, message },
        }
    }
}

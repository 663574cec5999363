use thiserror::Error;

use crate::decoder::DecodeError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limited: retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("No version published for system {0:?}")]
    NotFound(char),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Undecodable version token: {0}")]
    Decode(#[from] DecodeError),
}

//! API errors.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or undecodable body
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered outside the 2xx range
    #[error("server responded with status {0}")]
    Status(u16),
}

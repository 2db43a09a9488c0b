//! Error types for the RentRight SDK.

use thiserror::Error;

/// SDK operation errors
#[derive(Debug, Error)]
pub enum SdkError {
    /// The requested resource does not exist (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Connection error (network, DNS, timeout)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The API answered with a non-success status
    #[error("API error (HTTP {status}): {detail}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// `detail` field of the error body, or the raw body
        detail: String,
    },

    /// Response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            SdkError::ConnectionError(e.to_string())
        } else if e.is_decode() {
            SdkError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            SdkError::ApiError {
                status: status.as_u16(),
                detail: e.to_string(),
            }
        } else {
            SdkError::ConnectionError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Decode(e.to_string())
    }
}

/*
[INPUT]:  Error sources (key loading, signing, HTTP status, transport, serialization)
[OUTPUT]: Structured error types with status and body context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Kalshi adapter
#[derive(Error, Debug)]
pub enum KalshiError {
    /// Private key file missing, unreadable or not an unencrypted PEM RSA key
    #[error("Failed to load private key from {}: {message}", path.display())]
    KeyLoad { path: PathBuf, message: String },

    /// The RSA-PSS signing operation failed
    #[error("Request signing failed: {0}")]
    Signature(String),

    /// API returned a non-2xx response
    #[error("HTTP {status}: {body}")]
    Http { status: StatusCode, body: String },

    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Caller supplied an argument the API cannot express
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KalshiError {
    /// Create an HTTP error from a status code and the raw response body
    pub fn http_error(status: StatusCode, body: impl Into<String>) -> Self {
        KalshiError::Http {
            status,
            body: body.into(),
        }
    }

    /// Status code of a non-2xx response, if this is one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            KalshiError::Http { status, .. } => Some(*status),
            KalshiError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Check if the server answered with a non-2xx status
    pub fn is_http_error(&self) -> bool {
        matches!(self, KalshiError::Http { .. })
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            KalshiError::KeyLoad { .. } | KalshiError::Signature(_) => true,
            KalshiError::Http { status, .. } => {
                *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
            }
            _ => false,
        }
    }
}

/// Result type alias for Kalshi operations
pub type Result<T> = std::result::Result<T, KalshiError>;

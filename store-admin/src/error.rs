//! Client error types

use crate::form::FormError;
use store_shared::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No session, or the backend rejected it. The stored token is gone.
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status, with the backend's `detail`
    #[error("API error {status}: {detail}")]
    Api { status: u16, detail: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Promotion form could not be encoded or loaded
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let message = err.to_string();
        match err {
            ClientError::Http(e) if e.is_timeout() => {
                AppError::with_message(ErrorCode::TimeoutError, message)
            }
            ClientError::Http(_) => AppError::with_message(ErrorCode::NetworkError, message),
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                AppError::with_message(ErrorCode::InvalidFormat, message)
            }
            ClientError::Unauthorized(_) => {
                AppError::with_message(ErrorCode::NotAuthenticated, message)
            }
            ClientError::Forbidden(_) => AppError::with_message(ErrorCode::TokenInvalid, message),
            ClientError::NotFound(_) => AppError::with_message(ErrorCode::NotFound, message),
            ClientError::Validation(_) => AppError::validation(message),
            ClientError::Api { status, detail } => {
                let code = match status {
                    409 => ErrorCode::AlreadyExists,
                    408 | 504 => ErrorCode::TimeoutError,
                    500..=599 => ErrorCode::InternalError,
                    _ => ErrorCode::InvalidRequest,
                };
                AppError::with_message(code, detail).with_detail("status", status)
            }
            ClientError::Form(e) => e.into(),
        }
    }
}

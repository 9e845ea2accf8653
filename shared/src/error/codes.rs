//! Error codes surfaced by the store admin
//!
//! Error codes are organized by range:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Promotion errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a u16 so logs and callers agree on plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed (form input or backend 400/422)
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Request rejected by the backend for another reason
    InvalidRequest = 5,
    /// Response body could not be read
    InvalidFormat = 6,

    // ==================== 1xxx: Auth ====================
    /// No session, or the backend rejected it
    NotAuthenticated = 1001,
    /// Session token lacks permission
    TokenInvalid = 1004,

    // ==================== 4xxx: Promotion ====================
    /// Stored condition/action document is malformed
    PromotionRuleInvalid = 4002,
    /// Rule form state does not match its selected tag
    PromotionFormInconsistent = 4003,

    // ==================== 9xxx: System ====================
    /// Backend failed
    InternalError = 9001,
    /// Network error
    NetworkError = 9101,
    /// Request timed out
    TimeoutError = 9102,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",

            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            ErrorCode::PromotionRuleInvalid => "Promotion rule is invalid",
            ErrorCode::PromotionFormInconsistent => "Promotion form state is inconsistent",

            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Request timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 is not a known error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),

            1001 => Ok(ErrorCode::NotAuthenticated),
            1004 => Ok(ErrorCode::TokenInvalid),

            4002 => Ok(ErrorCode::PromotionRuleInvalid),
            4003 => Ok(ErrorCode::PromotionFormInconsistent),

            9001 => Ok(ErrorCode::InternalError),
            9101 => Ok(ErrorCode::NetworkError),
            9102 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

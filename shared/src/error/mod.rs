//! Error taxonomy for the store admin
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`AppError`]: Error with code, message, and details, as reported to the user
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 4xxx: Promotion errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use store_shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::PromotionRuleInvalid, "VALOR_MINIMO: missing field 'valor'")
//!     .with_detail("promotion_id", 12);
//! assert_eq!(err.code.code(), 4002);
//! assert_eq!(err.to_string(), "VALOR_MINIMO: missing field 'valor'");
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};

//! Shared types for the store admin
//!
//! Wire models of the admin backend, the typed promotion rules with their
//! evaluator, and the error taxonomy used by the client.

pub mod client;
pub mod error;
pub mod models;
pub mod rule;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use serde_json;

pub use error::{AppError, AppResult, ErrorCode};
pub use rule::{RuleAction, RuleCondition, Weekday};

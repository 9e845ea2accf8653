//! Client-related types shared with the admin client
//!
//! Auth request/response shapes of the admin backend.

use serde::{Deserialize, Serialize};

/// Login form (sent as `application/x-www-form-urlencoded`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Error body returned by the backend on failures
///
/// `detail` is usually a string, but validation failures return a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    /// Flatten `detail` to a single readable line
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.get("msg")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                        .unwrap_or_else(|| item.to_string())
                })
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}

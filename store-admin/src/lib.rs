//! Store Admin - client for the multi-tenant store backend
//!
//! Talks to the admin REST API (tenants, products, options, promotions,
//! freight) and owns the promotion editing workflow.

pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod form;
pub mod http;
pub mod logger;
pub mod session;

pub use config::ClientConfig;
pub use editor::PromotionEditor;
pub use error::{ClientError, ClientResult};
pub use form::{EncodedRule, FormError, PromotionRuleForm};
pub use http::HttpClient;
pub use session::EditingContext;

// Re-export shared types for convenience
pub use store_shared::client::{LoginRequest, LoginResponse};
pub use store_shared::models;

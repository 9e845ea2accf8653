//! Data models
//!
//! Field names follow the backend's JSON contract (Portuguese names included).

pub mod freight;
pub mod option;
pub mod product;
pub mod promotion;
pub mod tenant;
pub mod upload;

// Re-exports
pub use freight::*;
pub use option::*;
pub use product::*;
pub use promotion::*;
pub use tenant::*;
pub use upload::*;

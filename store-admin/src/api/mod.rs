//! Backend endpoints, one module per resource
//!
//! Each module adds methods to [`HttpClient`](crate::HttpClient).

mod auth;
mod freight;
mod options;
mod products;
mod promotions;
mod tenants;

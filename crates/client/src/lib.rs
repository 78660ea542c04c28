//! `stockform-client`
//!
//! **Responsibility:** issuing requests to the product API.
//!
//! This crate provides:
//! - `ProductApi`, the seam the form controller talks to (mockable)
//! - `HttpProductApi`, the reqwest-backed implementation
//! - `ApiConfig`, the single injected base URL (plus optional timeout)
//!
//! The API is the only authority on product state; nothing is cached here.

pub mod api;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;

pub use api::{MockProductApi, ProductApi};
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use endpoint::Endpoint;
pub use error::{ApiError, ErrorKind};
pub use http::HttpProductApi;

//! `stockform-core` — shared building blocks.
//!
//! Identifiers and the error model used by every other crate. No IO here.

pub mod error;
pub mod id;

pub use error::DomainError;
pub use id::ProductId;

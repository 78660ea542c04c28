//! Product model for the inventory form.
//!
//! This crate contains the product record as it travels over the wire, the
//! form field catalogue, and the input-shape rules a host UI applies before a
//! value reaches the draft (no IO, no HTTP).

pub mod field;
pub mod product;

pub use field::{InputKind, ProductField};
pub use product::{FormMode, Product};

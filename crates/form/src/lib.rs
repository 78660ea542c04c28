//! `stockform-form`
//!
//! **Responsibility:** the product form session.
//!
//! `ProductFormController` owns the draft, the two product lists and the
//! create/update mode. Every user action maps to one method; every mutation
//! goes through `ProductApi` and is followed by a full refetch of the affected
//! lists. Outcomes reach the user through a `Notifier`.

pub mod controller;
pub mod error;
pub mod notice;

pub use controller::ProductFormController;
pub use error::FormError;
pub use notice::{Notice, NoticeKind, Notifier};

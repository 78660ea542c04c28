use thiserror::Error;

use stockform_client::ApiError;
use stockform_core::{DomainError, ProductId};

#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The form is in update mode but the edited product carried no id.
    #[error("form is in update mode but the product has no id")]
    MissingEditingId,

    #[error("product {0} is not in the active list")]
    NotListed(ProductId),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

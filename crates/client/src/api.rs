use async_trait::async_trait;
use mockall::automock;

use stockform_core::ProductId;
use stockform_products::Product;

use crate::error::ApiError;

/// Request-issuing collaborator for the product API.
///
/// One method per endpoint. Implementations report non-2xx answers as
/// `ApiError::Status`; callers decide what a failure means for them.
#[automock]
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Products not marked as deleted.
    async fn list_active(&self) -> Result<Vec<Product>, ApiError>;

    /// Soft-deleted products.
    async fn list_removed(&self) -> Result<Vec<Product>, ApiError>;

    /// Create a product. The body is sent as-is.
    async fn create(&self, product: Product) -> Result<(), ApiError>;

    /// Replace every field of the product stored under `id`.
    async fn update(&self, id: ProductId, product: Product) -> Result<(), ApiError>;

    /// Move a product to the removed set.
    async fn soft_delete(&self, id: ProductId) -> Result<(), ApiError>;

    /// Move a product back to the active set.
    async fn restore(&self, id: ProductId) -> Result<(), ApiError>;

    /// Delete a product for good.
    async fn purge(&self, id: ProductId) -> Result<(), ApiError>;
}

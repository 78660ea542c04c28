//! The product form session.

use stockform_client::{ApiError, ProductApi};
use stockform_core::ProductId;
use stockform_products::{FormMode, Product, ProductField};

use crate::error::FormError;
use crate::notice::{Notice, Notifier};

/// Session state behind the product form.
///
/// The two lists are caches of whatever the API returned last. They are
/// never patched locally: each successful mutation refetches them.
///
/// Every operation takes `&mut self`, so one controller never has two
/// requests in flight and completions cannot overwrite each other.
#[derive(Debug)]
pub struct ProductFormController<A, N> {
    api: A,
    notifier: N,
    draft: Product,
    active: Vec<Product>,
    removed: Vec<Product>,
    editing: bool,
    editing_id: Option<ProductId>,
}

impl<A: ProductApi, N: Notifier> ProductFormController<A, N> {
    /// A controller in create mode with an empty draft and empty lists.
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            draft: Product::empty(),
            active: Vec::new(),
            removed: Vec::new(),
            editing: false,
            editing_id: None,
        }
    }

    pub fn draft(&self) -> &Product {
        &self.draft
    }

    pub fn active(&self) -> &[Product] {
        &self.active
    }

    pub fn removed(&self) -> &[Product] {
        &self.removed
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn editing_id(&self) -> Option<&ProductId> {
        self.editing_id.as_ref()
    }

    pub fn mode(&self) -> FormMode {
        if self.editing {
            FormMode::Update
        } else {
            FormMode::Create
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn find_active(&self, id: &ProductId) -> Option<&Product> {
        self.active.iter().find(|p| p.id.as_ref() == Some(id))
    }

    /// First load of the active list.
    ///
    /// A failure is logged and leaves the list empty; the user is not told.
    pub async fn initialize(&mut self) -> Result<(), FormError> {
        tracing::info!("loading product form");
        if let Err(e) = self.reload_active().await {
            self.active.clear();
            return Err(e.into());
        }
        Ok(())
    }

    /// Replace one field of the draft. No validation.
    pub fn update_field(&mut self, field: ProductField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// `update_field` addressed by field name (`productCode`, `qty`, ...).
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field: ProductField = name.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Send the draft: create in create mode, full replace in update mode.
    ///
    /// On success the active list is reloaded and the form is cleared. On
    /// failure nothing local changes.
    pub async fn submit(&mut self) -> Result<(), FormError> {
        let mode = self.mode();
        tracing::info!(?mode, editing_id = ?self.editing_id, "submitting product");

        let result = match mode {
            FormMode::Create => self.api.create(self.draft.clone()).await.map_err(FormError::from),
            FormMode::Update => match self.editing_id.clone() {
                Some(id) => self
                    .api
                    .update(id, self.draft.clone())
                    .await
                    .map_err(FormError::from),
                None => Err(FormError::MissingEditingId),
            },
        };

        if let Err(e) = result {
            log_failure("save product", &e);
            self.notifier.notify(Notice::save_failed());
            return Err(e);
        }

        self.notifier.notify(match mode {
            FormMode::Create => Notice::product_added(),
            FormMode::Update => Notice::product_updated(),
        });
        // Reload errors are logged in `reload_active`; the save still stands.
        self.reload_active().await.ok();
        self.clear_form();
        Ok(())
    }

    /// Load `product` into the form and switch to update mode.
    pub fn edit_product(&mut self, product: Product) {
        self.editing_id = product.id.clone();
        self.draft = product;
        self.editing = true;
    }

    /// `edit_product` for a product picked by id from the active list.
    pub fn edit_by_id(&mut self, id: &ProductId) -> Result<(), FormError> {
        let product = self
            .find_active(id)
            .cloned()
            .ok_or_else(|| FormError::NotListed(id.clone()))?;
        self.edit_product(product);
        Ok(())
    }

    /// Reset to an empty draft in create mode.
    pub fn clear_form(&mut self) {
        self.draft = Product::empty();
        self.editing = false;
        self.editing_id = None;
    }

    /// Soft-delete `id`, then reload the active list.
    pub async fn remove_product(&mut self, id: ProductId) -> Result<(), FormError> {
        tracing::info!(%id, "removing product");

        if let Err(e) = self.api.soft_delete(id).await {
            let e = FormError::from(e);
            log_failure("remove product", &e);
            self.notifier.notify(Notice::remove_failed());
            return Err(e);
        }

        self.notifier.notify(Notice::product_removed());
        self.reload_active().await.ok();
        Ok(())
    }

    /// Fetch the removed list. Failures are logged only.
    pub async fn show_removed(&mut self) -> Result<(), FormError> {
        self.reload_removed().await.map_err(FormError::from)
    }

    /// Restore `id`, then reload the active list and the removed list, in
    /// that order.
    pub async fn restore_product(&mut self, id: ProductId) -> Result<(), FormError> {
        tracing::info!(%id, "restoring product");

        if let Err(e) = self.api.restore(id).await {
            let e = FormError::from(e);
            log_failure("restore product", &e);
            self.notifier.notify(Notice::restore_failed());
            return Err(e);
        }

        self.notifier.notify(Notice::product_restored());
        self.reload_active().await.ok();
        self.reload_removed().await.ok();
        Ok(())
    }

    /// Permanently delete `id`, then reload the removed list only.
    pub async fn purge_product(&mut self, id: ProductId) -> Result<(), FormError> {
        tracing::info!(%id, "purging product");

        if let Err(e) = self.api.purge(id).await {
            let e = FormError::from(e);
            log_failure("permanently remove product", &e);
            self.notifier.notify(Notice::purge_failed());
            return Err(e);
        }

        self.notifier.notify(Notice::product_purged());
        self.reload_removed().await.ok();
        Ok(())
    }

    // On failure the previous list stays in place.
    async fn reload_active(&mut self) -> Result<(), ApiError> {
        match self.api.list_active().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "active products loaded");
                self.active = products;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, kind = ?e.kind(), "unable to fetch products");
                Err(e)
            }
        }
    }

    async fn reload_removed(&mut self) -> Result<(), ApiError> {
        match self.api.list_removed().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "removed products loaded");
                self.removed = products;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, kind = ?e.kind(), "unable to fetch deleted products");
                Err(e)
            }
        }
    }
}

fn log_failure(action: &str, err: &FormError) {
    match err {
        FormError::Api(api) => tracing::error!(
            action,
            error = %api,
            kind = ?api.kind(),
            status = ?api.status(),
            payload = ?api.payload(),
            "request failed"
        ),
        other => tracing::error!(action, error = %other, "request not sent"),
    }
}

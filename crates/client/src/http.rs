//! reqwest-backed product API client.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde_json::Value;

use stockform_core::ProductId;
use stockform_products::Product;

use crate::api::ProductApi;
use crate::config::ApiConfig;
use crate::endpoint::Endpoint;
use crate::error::ApiError;

/// HTTP client for the product API.
///
/// Holds one connection pool for its whole lifetime. Every request is built
/// from the configured base URL; call sites never see an origin.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    config: ApiConfig,
    http: Client,
}

impl HttpProductApi {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Absolute URL for `endpoint`, keeping any path prefix of the base URL.
    pub fn url(&self, endpoint: &Endpoint) -> Result<Url, ApiError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config(format!("'{}' cannot be a base url", self.config.base_url)))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }

    async fn send(&self, endpoint: Endpoint, body: Option<&Product>) -> Result<Response, ApiError> {
        let url = self.url(&endpoint)?;
        tracing::debug!(method = %endpoint.method(), path = %endpoint.path(), "sending request");

        let mut req = self.http.request(endpoint.method(), url);
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::debug!(%endpoint, error = %e, "request failed before a response");
            ApiError::from(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: error_payload(text),
            });
        }

        tracing::debug!(%endpoint, status = status.as_u16(), "request succeeded");
        Ok(resp)
    }

    async fn fetch_list(&self, endpoint: Endpoint) -> Result<Vec<Product>, ApiError> {
        let resp = self.send(endpoint, None).await?;
        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Parse(format!("product list: {e}")))
    }

    // Success bodies (ack or echoed product) are not needed.
    async fn execute(&self, endpoint: Endpoint, body: Option<&Product>) -> Result<(), ApiError> {
        self.send(endpoint, body).await.map(|_| ())
    }
}

fn error_payload(text: String) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn list_active(&self) -> Result<Vec<Product>, ApiError> {
        self.fetch_list(Endpoint::ListActive).await
    }

    async fn list_removed(&self) -> Result<Vec<Product>, ApiError> {
        self.fetch_list(Endpoint::ListRemoved).await
    }

    async fn create(&self, product: Product) -> Result<(), ApiError> {
        self.execute(Endpoint::Create, Some(&product)).await
    }

    async fn update(&self, id: ProductId, product: Product) -> Result<(), ApiError> {
        self.execute(Endpoint::Update(id), Some(&product)).await
    }

    async fn soft_delete(&self, id: ProductId) -> Result<(), ApiError> {
        self.execute(Endpoint::SoftDelete(id), None).await
    }

    async fn restore(&self, id: ProductId) -> Result<(), ApiError> {
        self.execute(Endpoint::Restore(id), None).await
    }

    async fn purge(&self, id: ProductId) -> Result<(), ApiError> {
        self.execute(Endpoint::Purge(id), None).await
    }
}

//! Client configuration.

use std::time::Duration;

use reqwest::Url;

use crate::error::ApiError;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Where the product API lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Url,
    /// `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
        }
    }

    /// Parse a base URL. Only `http` and `https` are accepted.
    pub fn parse(base_url: &str) -> Result<Self, ApiError> {
        let url = Url::parse(base_url.trim())
            .map_err(|e| ApiError::Config(format!("invalid base url '{base_url}': {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "unsupported scheme '{}' in base url",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() {
            return Err(ApiError::Config(format!("'{base_url}' cannot be a base url")));
        }

        Ok(Self::new(url))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let config = ApiConfig::parse(DEFAULT_API_URL).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:5000/");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn parse_rejects_non_http_schemes() {
        let err = ApiConfig::parse("ftp://example.com").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = ApiConfig::parse("not a url").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn with_timeout_sets_duration() {
        let config = ApiConfig::parse("https://inventory.example.com/api")
            .unwrap()
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}

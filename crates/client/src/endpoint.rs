//! Routing table for the product API.

use reqwest::Method;

use stockform_core::ProductId;

/// One of the seven product API calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    ListActive,
    ListRemoved,
    Create,
    Update(ProductId),
    SoftDelete(ProductId),
    Restore(ProductId),
    Purge(ProductId),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListActive | Endpoint::ListRemoved => Method::GET,
            Endpoint::Create => Method::POST,
            Endpoint::Update(_) | Endpoint::Restore(_) => Method::PUT,
            Endpoint::SoftDelete(_) | Endpoint::Purge(_) => Method::DELETE,
        }
    }

    /// Path segments below the base URL (unencoded).
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::ListActive | Endpoint::Create => vec!["products"],
            Endpoint::ListRemoved => vec!["products", "deleted"],
            Endpoint::Update(id) | Endpoint::SoftDelete(id) => vec!["products", id.as_str()],
            Endpoint::Restore(id) => vec!["products", "restore", id.as_str()],
            Endpoint::Purge(id) => vec!["products", "permanently", id.as_str()],
        }
    }

    /// Path relative to the base URL, e.g. `/products/restore/abc123`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }
}

impl core::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> ProductId {
        "abc123".parse().unwrap()
    }

    #[test]
    fn routes_match_api_table() {
        let table = [
            (Endpoint::ListActive, Method::GET, "/products"),
            (Endpoint::ListRemoved, Method::GET, "/products/deleted"),
            (Endpoint::Create, Method::POST, "/products"),
            (Endpoint::Update(id()), Method::PUT, "/products/abc123"),
            (Endpoint::SoftDelete(id()), Method::DELETE, "/products/abc123"),
            (Endpoint::Restore(id()), Method::PUT, "/products/restore/abc123"),
            (Endpoint::Purge(id()), Method::DELETE, "/products/permanently/abc123"),
        ];

        for (endpoint, method, path) in table {
            assert_eq!(endpoint.method(), method, "{endpoint}");
            assert_eq!(endpoint.path(), path, "{endpoint}");
        }
    }

    #[test]
    fn display_shows_method_and_path() {
        assert_eq!(Endpoint::Purge(id()).to_string(), "DELETE /products/permanently/abc123");
    }
}

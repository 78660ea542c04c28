//! Product identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Server-assigned product identifier.
///
/// Opaque to the client: it is never generated locally, only received from
/// the API and echoed back in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_id("ProductId: empty"));
        }
        if trimmed.contains('/') {
            return Err(DomainError::invalid_id(format!(
                "ProductId: '{trimmed}' contains a path separator"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_trims() {
        let id: ProductId = "  abc123 ".parse().unwrap();
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(id.to_string(), "abc123");
    }

    #[test]
    fn rejects_empty() {
        let err = "   ".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn rejects_path_separator() {
        let err = "restore/abc".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn serializes_as_bare_string() {
        let id: ProductId = "65a1f0".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"65a1f0\"");
        let back: ProductId = serde_json::from_str("\"65a1f0\"").unwrap();
        assert_eq!(back, id);
    }
}

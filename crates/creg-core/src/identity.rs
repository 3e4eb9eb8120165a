//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers used across the Civic Registry
//! Stack. These prevent accidental identifier confusion — you cannot pass
//! a `PropertyId` where a `Principal` is expected.
//!
//! Both identifiers are opaque: they are supplied by the execution
//! environment (or by the registering caller, for properties) and are only
//! ever compared for equality. The stack never parses, validates, or
//! generates them.

use serde::{Deserialize, Serialize};

/// An opaque, unforgeable identifier for a caller or owner.
///
/// The execution environment is responsible for establishing which
/// principal is invoking an operation; the registries treat the value as
/// an equality-comparable token and nothing more.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Principal(pub String);

/// An opaque identifier for a registered property.
///
/// Caller-supplied at registration. Not validated for uniqueness or
/// format — a re-registration under the same identifier overwrites the
/// prior record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub String);

impl Principal {
    /// Wrap an externally supplied principal identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PropertyId {
    /// Wrap a caller-supplied property identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_equality() {
        let a = Principal::new("permits-office");
        let b = Principal::new("permits-office");
        let c = Principal::new("acme-builders");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_property_id_equality() {
        let a = PropertyId::new("PROP-001");
        let b = PropertyId::new("PROP-001");
        assert_eq!(a, b);
        assert_ne!(a, PropertyId::new("PROP-002"));
    }

    #[test]
    fn test_display_is_raw_identifier() {
        assert_eq!(Principal::new("permits-office").to_string(), "permits-office");
        assert_eq!(PropertyId::new("PROP-001").to_string(), "PROP-001");
    }

    #[test]
    fn test_serde_roundtrip() {
        let p = Principal::new("permits-office");
        let json = serde_json::to_string(&p).unwrap();
        let parsed: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(p, parsed);

        let id = PropertyId::new("PROP-001");
        let json = serde_json::to_string(&id).unwrap();
        let parsed: PropertyId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}

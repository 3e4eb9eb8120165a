//! # Error Types — Shared Registry Error Taxonomy
//!
//! Defines the error type reported by every mutating registry operation.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Two conditions, both recoverable by the caller: the invoking principal
//!   is not the configured authority, or the target key has no record.
//! - Both are checked strictly before any write, so a failed operation
//!   never leaves partial state behind.
//! - Each variant carries a stable numeric code that downstream consumers
//!   may match on; the codes never change.
//! - Read-only queries do not use this type at all — an absent key yields
//!   a default value, not an error.

use thiserror::Error;

use crate::identity::Principal;

/// Failure reported by a mutating registry operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The invoking principal is not the configured registry authority.
    #[error("caller {caller} is not the registry authority")]
    NotAuthorized {
        /// The rejected caller.
        caller: Principal,
    },

    /// No record exists for the targeted key.
    #[error("no record found for {key}")]
    NotFound {
        /// The key that had no record.
        key: String,
    },
}

impl RegistryError {
    /// The stable numeric code for this error.
    ///
    /// Codes are part of the public contract: `100` for an authorization
    /// failure, `101` for a missing record.
    pub fn code(&self) -> u32 {
        match self {
            Self::NotAuthorized { .. } => 100,
            Self::NotFound { .. } => 101,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_codes() {
        let unauthorized = RegistryError::NotAuthorized {
            caller: Principal::new("acme-builders"),
        };
        let missing = RegistryError::NotFound {
            key: "PROP-001".to_string(),
        };
        assert_eq!(unauthorized.code(), 100);
        assert_eq!(missing.code(), 101);
    }

    #[test]
    fn test_display_messages() {
        let unauthorized = RegistryError::NotAuthorized {
            caller: Principal::new("acme-builders"),
        };
        assert_eq!(
            unauthorized.to_string(),
            "caller acme-builders is not the registry authority"
        );

        let missing = RegistryError::NotFound {
            key: "PROP-001".to_string(),
        };
        assert_eq!(missing.to_string(), "no record found for PROP-001");
    }
}

//! # Authority Gate
//!
//! Single-point enforcement of "only the configured authority may mutate
//! state". Both registries call [`AuthorityGate::require`] at the top of
//! every mutating operation, before any state is read or written; read
//! operations never consult the gate.
//!
//! The authority principal is injected once at construction. It is plain
//! configuration — the gate never mutates it, and there is no operation to
//! transfer or share the authority role.

use serde::{Deserialize, Serialize};

use creg_core::{Principal, RegistryError};

/// Compares the invoking principal against the configured authority.
///
/// A pure equality check: the gate holds no state beyond the authority
/// principal and performs no side effects on either outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorityGate {
    authority: Principal,
}

impl AuthorityGate {
    /// Create a gate for the given authority principal.
    pub fn new(authority: Principal) -> Self {
        Self { authority }
    }

    /// The configured authority principal.
    pub fn authority(&self) -> &Principal {
        &self.authority
    }

    /// Reject the operation unless `caller` is the configured authority.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAuthorized`] if `caller` differs from
    /// the configured authority.
    pub fn require(&self, caller: &Principal) -> Result<(), RegistryError> {
        if caller == &self.authority {
            Ok(())
        } else {
            tracing::warn!(%caller, "rejected mutation from non-authority caller");
            Err(RegistryError::NotAuthorized {
                caller: caller.clone(),
            })
        }
    }
}

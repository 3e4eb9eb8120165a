//! # Property Verification Registry
//!
//! Tracks whether a registered property has been verified. Only the
//! configured authority may register or verify properties; the verified
//! check is open to any caller and has no height dependency.
//!
//! ## Record Lifecycle
//!
//! ```text
//! (absent) ──register_property()──▶ unverified ──verify_property()──▶ verified
//!                                       ▲                                │
//!                                       └───────register_property()──────┘
//! ```
//!
//! Verification is one-directional: no operation resets a verified
//! property back to unverified except a fresh registration, which
//! replaces the record wholesale. Records are never deleted.

use serde::{Deserialize, Serialize};

use creg_core::{Principal, PropertyId, RegistryError};

use crate::authority::AuthorityGate;
use crate::store::RecordMap;

// ─── Property Record ─────────────────────────────────────────────────

/// A registered property, keyed by its caller-supplied identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// The principal that performed the registration.
    pub owner: Principal,
    /// Caller-supplied zoning tag.
    pub zone_type: String,
    /// False at creation; set true by verification and never reset.
    pub verified: bool,
}

// ─── Registry ────────────────────────────────────────────────────────

/// Registry of property records, mutable only by its authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyVerificationRegistry {
    gate: AuthorityGate,
    properties: RecordMap<PropertyId, PropertyRecord>,
}

impl PropertyVerificationRegistry {
    /// Create a registry whose mutations are restricted to `authority`.
    pub fn new(authority: Principal) -> Self {
        Self {
            gate: AuthorityGate::new(authority),
            properties: RecordMap::new(),
        }
    }

    /// The principal permitted to mutate this registry.
    pub fn authority(&self) -> &Principal {
        self.gate.authority()
    }

    /// Register a property under `property_id`, owned by the caller.
    ///
    /// The record starts unverified. Registration performs no existence
    /// check: re-registering an identifier overwrites the prior record,
    /// resetting its verification state.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAuthorized`] if `caller` is not the
    /// configured authority. Nothing is written on failure.
    pub fn register_property(
        &mut self,
        caller: &Principal,
        property_id: PropertyId,
        zone_type: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.gate.require(caller)?;
        tracing::debug!(property = %property_id, owner = %caller, "property registered");
        self.properties.put(
            property_id,
            PropertyRecord {
                owner: caller.clone(),
                zone_type: zone_type.into(),
                verified: false,
            },
        );
        Ok(())
    }

    /// Mark the property under `property_id` as verified.
    ///
    /// Idempotent: verifying an already-verified property succeeds and
    /// re-sets the flag.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAuthorized`] if `caller` is not the
    /// configured authority, or [`RegistryError::NotFound`] if no record
    /// exists for `property_id`. Nothing is written on failure.
    pub fn verify_property(
        &mut self,
        caller: &Principal,
        property_id: &PropertyId,
    ) -> Result<(), RegistryError> {
        self.gate.require(caller)?;
        if !self.properties.update(property_id, |record| record.verified = true) {
            return Err(RegistryError::NotFound {
                key: property_id.to_string(),
            });
        }
        tracing::debug!(property = %property_id, "property verified");
        Ok(())
    }

    /// Whether the property under `property_id` has been verified.
    ///
    /// Open to any caller. Returns false for unregistered identifiers.
    pub fn is_property_verified(&self, property_id: &PropertyId) -> bool {
        match self.properties.get(property_id) {
            Some(record) => record.verified,
            None => false,
        }
    }

    /// The stored property record for `property_id`, if any.
    pub fn property(&self, property_id: &PropertyId) -> Option<&PropertyRecord> {
        self.properties.get(property_id)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn authority() -> Principal {
        Principal::new("permits-office")
    }

    fn prop_id() -> PropertyId {
        PropertyId::new("PROP-001")
    }

    fn registry() -> PropertyVerificationRegistry {
        PropertyVerificationRegistry::new(authority())
    }

    fn registry_with_property() -> PropertyVerificationRegistry {
        let mut reg = registry();
        reg.register_property(&authority(), prop_id(), "RESIDENTIAL")
            .unwrap();
        reg
    }

    // ── Registration ─────────────────────────────────────────────────

    #[test]
    fn test_register_creates_unverified_record() {
        let reg = registry_with_property();
        let record = reg.property(&prop_id()).unwrap();
        assert_eq!(record.owner, authority());
        assert_eq!(record.zone_type, "RESIDENTIAL");
        assert!(!record.verified);
    }

    #[test]
    fn test_register_rejects_non_authority() {
        let mut reg = registry();
        let err = reg
            .register_property(&Principal::new("acme-builders"), prop_id(), "RESIDENTIAL")
            .unwrap_err();
        assert_eq!(err.code(), 100);
        assert!(reg.property(&prop_id()).is_none());
    }

    #[test]
    fn test_reregistration_resets_verification() {
        let mut reg = registry_with_property();
        reg.verify_property(&authority(), &prop_id()).unwrap();
        assert!(reg.is_property_verified(&prop_id()));

        reg.register_property(&authority(), prop_id(), "COMMERCIAL")
            .unwrap();
        assert!(!reg.is_property_verified(&prop_id()));
        assert_eq!(reg.property(&prop_id()).unwrap().zone_type, "COMMERCIAL");
    }

    // ── Verification ─────────────────────────────────────────────────

    #[test]
    fn test_verify_sets_flag() {
        let mut reg = registry_with_property();
        reg.verify_property(&authority(), &prop_id()).unwrap();
        assert!(reg.is_property_verified(&prop_id()));
        assert!(reg.property(&prop_id()).unwrap().verified);
    }

    #[test]
    fn test_verify_rejects_non_authority() {
        let mut reg = registry_with_property();
        let err = reg
            .verify_property(&Principal::new("acme-builders"), &prop_id())
            .unwrap_err();
        assert_eq!(err.code(), 100);
        assert!(!reg.is_property_verified(&prop_id()));
    }

    #[test]
    fn test_verify_unknown_property_not_found() {
        let mut reg = registry();
        let err = reg.verify_property(&authority(), &prop_id()).unwrap_err();
        assert_eq!(err.code(), 101);
    }

    #[test]
    fn test_verify_is_idempotent() {
        let mut reg = registry_with_property();
        reg.verify_property(&authority(), &prop_id()).unwrap();
        reg.verify_property(&authority(), &prop_id()).unwrap();
        assert!(reg.is_property_verified(&prop_id()));
    }

    // ── Verified check ───────────────────────────────────────────────

    #[test]
    fn test_unregistered_property_is_unverified() {
        let reg = registry();
        assert!(!reg.is_property_verified(&prop_id()));
    }

    // ── Serialization ────────────────────────────────────────────────

    #[test]
    fn test_registry_serde_roundtrip() {
        let mut reg = registry_with_property();
        reg.verify_property(&authority(), &prop_id()).unwrap();
        let json = serde_json::to_string(&reg).unwrap();
        let parsed: PropertyVerificationRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.authority(), reg.authority());
        assert_eq!(parsed.property(&prop_id()), reg.property(&prop_id()));
    }
}

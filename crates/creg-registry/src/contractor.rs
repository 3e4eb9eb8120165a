//! # Contractor License Registry
//!
//! Tracks whether a principal holds a currently-valid contractor license.
//! Only the configured authority may register or revoke licenses; validity
//! checks are open to any caller and depend on the current processing
//! height supplied with the call.
//!
//! ## Record Lifecycle
//!
//! ```text
//! (absent) ──register()──▶ active ──revoke()──▶ inactive
//!                            ▲                      │
//!                            └─────register()───────┘
//! ```
//!
//! Registration is an unconditional overwrite: re-registering a principal
//! replaces the whole record, resetting the active flag and recomputing
//! the expiration height from the new call's inputs. Revocation flips the
//! active flag and is idempotent. Records are never deleted.

use serde::{Deserialize, Serialize};

use creg_core::{Height, Principal, RegistryError};

use crate::authority::AuthorityGate;
use crate::store::RecordMap;

// ─── License Record ──────────────────────────────────────────────────

/// A contractor license, keyed by the principal that registered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    /// Caller-supplied license identifier. Not validated for uniqueness
    /// or format.
    pub license_number: String,
    /// Caller-supplied specialization tag.
    pub specialization: String,
    /// The height at which the license expires. Fixed at registration;
    /// only a fresh registration recomputes it.
    pub expiration_height: Height,
    /// True at creation; set false by revocation and never reset.
    pub is_active: bool,
}

impl LicenseRecord {
    /// Whether the license is valid at the given height.
    ///
    /// Strict comparison: the license expires exactly at its expiration
    /// height, not after it.
    pub fn is_valid_at(&self, current_height: Height) -> bool {
        self.is_active && current_height < self.expiration_height
    }
}

// ─── Registry ────────────────────────────────────────────────────────

/// Registry of contractor licenses, mutable only by its authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractorLicenseRegistry {
    gate: AuthorityGate,
    licenses: RecordMap<Principal, LicenseRecord>,
}

impl ContractorLicenseRegistry {
    /// Create a registry whose mutations are restricted to `authority`.
    pub fn new(authority: Principal) -> Self {
        Self {
            gate: AuthorityGate::new(authority),
            licenses: RecordMap::new(),
        }
    }

    /// The principal permitted to mutate this registry.
    pub fn authority(&self) -> &Principal {
        self.gate.authority()
    }

    /// Register a license for the invoking principal.
    ///
    /// The record is keyed by `caller` itself — the registry records
    /// licenses for the invoking principal, not an arbitrary target. The
    /// expiration height is `current_height + validity_period`; a zero
    /// period is accepted and yields an already-expired license.
    ///
    /// Re-registration overwrites any prior record for the caller,
    /// discarding its state entirely.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAuthorized`] if `caller` is not the
    /// configured authority. Nothing is written on failure.
    pub fn register(
        &mut self,
        caller: &Principal,
        license_number: impl Into<String>,
        specialization: impl Into<String>,
        validity_period: u64,
        current_height: Height,
    ) -> Result<(), RegistryError> {
        self.gate.require(caller)?;
        let record = LicenseRecord {
            license_number: license_number.into(),
            specialization: specialization.into(),
            expiration_height: current_height.offset_by(validity_period),
            is_active: true,
        };
        tracing::debug!(
            contractor = %caller,
            expiration_height = %record.expiration_height,
            "contractor license registered"
        );
        self.licenses.put(caller.clone(), record);
        Ok(())
    }

    /// Revoke the license of `contractor`.
    ///
    /// Sets the record's active flag to false. Idempotent: revoking an
    /// already-revoked license succeeds and re-sets the flag.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAuthorized`] if `caller` is not the
    /// configured authority, or [`RegistryError::NotFound`] if no record
    /// exists for `contractor`. Nothing is written on failure.
    pub fn revoke(
        &mut self,
        caller: &Principal,
        contractor: &Principal,
    ) -> Result<(), RegistryError> {
        self.gate.require(caller)?;
        if !self.licenses.update(contractor, |record| record.is_active = false) {
            return Err(RegistryError::NotFound {
                key: contractor.to_string(),
            });
        }
        tracing::debug!(%contractor, "contractor license revoked");
        Ok(())
    }

    /// Whether `contractor` holds a valid license at `current_height`.
    ///
    /// Open to any caller. Returns false for principals with no record.
    pub fn is_license_valid(&self, contractor: &Principal, current_height: Height) -> bool {
        match self.licenses.get(contractor) {
            Some(record) => record.is_valid_at(current_height),
            None => false,
        }
    }

    /// The stored license record for `contractor`, if any.
    pub fn license(&self, contractor: &Principal) -> Option<&LicenseRecord> {
        self.licenses.get(contractor)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

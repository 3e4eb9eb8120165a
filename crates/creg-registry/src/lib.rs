//! # creg-registry — Authorization-Gated Registries
//!
//! Implements the two registries of the Civic Registry Stack over a shared
//! structural pattern: a single privileged authority controls every
//! mutating operation, every read is open to any caller, and records are
//! only ever created or updated in place, never deleted.
//!
//! ## Registries
//!
//! - **Contractor licensing** (`contractor.rs`): license records keyed by
//!   the registering principal. Validity is height-bounded — a license is
//!   valid while it is active and the current height is below its
//!   expiration height.
//!
//! - **Property verification** (`property.rs`): property records keyed by
//!   a caller-supplied identifier. Verification is a one-way flag with no
//!   height dependency.
//!
//! ## Design
//!
//! Both registries delegate their caller check to [`AuthorityGate`], which
//! holds the authority principal injected at construction. There is no
//! ambient admin state: the caller principal and the current height are
//! explicit parameters on every operation that needs them, so each
//! operation is a pure function of its inputs and the registry state.
//!
//! The mapping beneath each registry is a [`RecordMap`], a point-access
//! wrapper that deliberately exposes no removal operation. Revocation and
//! verification flip a flag on an existing record; nothing is ever
//! deleted.

pub mod authority;
pub mod contractor;
pub mod property;
pub mod store;

// ─── Authority re-exports ────────────────────────────────────────────

pub use authority::AuthorityGate;

// ─── Contractor licensing re-exports ─────────────────────────────────

pub use contractor::{ContractorLicenseRegistry, LicenseRecord};

// ─── Property verification re-exports ────────────────────────────────

pub use property::{PropertyRecord, PropertyVerificationRegistry};

// ─── Store re-exports ────────────────────────────────────────────────

pub use store::RecordMap;
